use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table, TableState},
};

use crate::domain::course::{Course, CourseStatus};

pub fn status_color(status: CourseStatus) -> Color {
    match status {
        CourseStatus::Enrolled => Color::Cyan,
        CourseStatus::Passed => Color::Green,
        CourseStatus::Failed => Color::Red,
        CourseStatus::Withdrawed => Color::DarkGray,
    }
}

/// Course history as a table of code, name, status and prerequisites
pub struct CourseTableWidget<'a> {
    courses: &'a [&'a Course],
    selected: Option<usize>,
    header_style: Style,
    highlight_style: Style,
}

impl<'a> CourseTableWidget<'a> {
    pub fn new(courses: &'a [&'a Course]) -> Self {
        Self {
            courses,
            selected: None,
            header_style: Style::default().bold(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn select(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    pub fn header_style(mut self, style: Style) -> Self {
        self.header_style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    fn row(course: &Course) -> Row<'static> {
        let prerequisites = course.prerequisites();
        let prerequisites = if prerequisites.is_empty() {
            "None".to_string()
        } else {
            prerequisites.join(", ")
        };
        Row::new(vec![
            Cell::from(course.id.clone().unwrap_or_else(|| "-".to_string())),
            Cell::from(course.name.clone()),
            Cell::from(course.status.to_string()).style(Style::default().fg(status_color(course.status))),
            Cell::from(prerequisites),
        ])
    }
}

impl Widget for CourseTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let header = Row::new(["Code", "Course", "Status", "Prerequisites"])
            .style(self.header_style)
            .bottom_margin(1);
        let rows: Vec<_> = self.courses.iter().map(|course| Self::row(course)).collect();
        let widths = [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(11),
            Constraint::Percentage(30),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(self.highlight_style);

        let mut state = TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
