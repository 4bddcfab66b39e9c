//! Roadmap tab: course history, the catalog and the latest recommendation

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{dashboard::DashboardState, AppState},
    domain::{course::catalog_entry_label, loadable::Loadable, text::wrap_text},
    presentation::{
        components::dashboard::{heading, render_placeholder},
        config::{Action, Styles},
        widgets::course_table::CourseTableWidget,
    },
};

#[derive(Debug, Clone, Default)]
pub struct RoadmapComponent;

impl RoadmapComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, dashboard: &DashboardState, frame: &mut Frame, area: Rect) {
        let [history_area, bottom_area] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Min(0)]).areas(area);
        let [catalog_area, recommendation_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(2)
                .areas(bottom_area);

        self.render_history(state, dashboard, frame, history_area);
        self.render_catalog(&state.config.config.styles, dashboard, frame, catalog_area);
        self.render_recommendation(state, dashboard, frame, recommendation_area);
    }

    fn render_history(&self, state: &AppState, dashboard: &DashboardState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let styles = &config.styles;
        let [title_area, table_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let mut title = vec![
            heading("Course history", styles).spans,
            vec![Span::styled(
                format!("  Filter: {}", dashboard.course_filter.label()),
                styles.get_or("accent", Style::default()),
            )],
        ]
        .concat();
        if let Some(key) = config.keybindings.hint(Action::CycleCourseFilter) {
            title.push(Span::styled(
                format!(" ({key} to change)"),
                styles.get_or("muted", Style::default().fg(Color::DarkGray)),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(title)), title_area);

        if render_placeholder(
            &dashboard.course_history,
            "No course history on file",
            styles,
            frame,
            table_area,
        ) {
            return;
        }

        let courses = dashboard.visible_courses();
        if courses.is_empty() {
            frame.render_widget(
                Paragraph::new("No courses match this filter")
                    .style(styles.get_or("muted", Style::default().fg(Color::DarkGray))),
                table_area,
            );
            return;
        }
        let table = CourseTableWidget::new(&courses)
            .select(dashboard.selected_course)
            .header_style(styles.get_or("title", Style::default().bold()))
            .highlight_style(styles.get_or("selected", Style::default().reversed()));
        frame.render_widget(table, table_area);
    }

    fn render_catalog(&self, styles: &Styles, dashboard: &DashboardState, frame: &mut Frame, area: Rect) {
        let [title_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        frame.render_widget(Paragraph::new(heading("Catalog", styles)), title_area);

        if render_placeholder(&dashboard.catalog, "Catalog not loaded", styles, frame, list_area) {
            return;
        }
        let text = dashboard
            .catalog
            .loaded()
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| format!("• {}", catalog_entry_label(entry)))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();
        frame.render_widget(scrolled(&text, dashboard.plan_scroll, list_area), list_area);
    }

    fn render_recommendation(
        &self,
        state: &AppState,
        dashboard: &DashboardState,
        frame: &mut Frame,
        area: Rect,
    ) {
        let config = &state.config.config;
        let styles = &config.styles;
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        frame.render_widget(Paragraph::new(heading("Recommended next", styles)), title_area);

        let body = match &dashboard.recommendation {
            Loadable::Idle => {
                let key = config
                    .keybindings
                    .hint(Action::RecommendCourses)
                    .unwrap_or_else(|| "the recommend key".to_string());
                Paragraph::new(format!("Press {key} to ask for course recommendations"))
                    .style(styles.get_or("muted", Style::default().fg(Color::DarkGray)))
            }
            Loadable::Loading => Paragraph::new("Thinking...")
                .style(styles.get_or("muted", Style::default().fg(Color::DarkGray))),
            Loadable::Failed(error) => Paragraph::new(format!("Could not get recommendations: {error}"))
                .style(styles.get_or("error", Style::default().fg(Color::Red))),
            Loadable::Loaded(text) => {
                frame.render_widget(scrolled(text, dashboard.plan_scroll, body_area), body_area);
                return;
            }
        };
        frame.render_widget(body.wrap(Wrap { trim: true }), body_area);
    }
}

/// Wraps `text` to the width of `area` and skips `offset` lines, stopping
/// once the last line reaches the bottom edge
fn scrolled(text: &str, offset: usize, area: Rect) -> Paragraph<'static> {
    let wrapped = wrap_text(text, area.width as usize);
    let line_count = wrapped.lines().count();
    let offset = offset.min(line_count.saturating_sub(area.height as usize));
    Paragraph::new(wrapped).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
}
