use ratatui::{
    prelude::*,
    widgets::{List, ListItem, ListState},
};

use crate::domain::{event::CampusEvent, text::truncate_width};

/// Campus events, three lines each, scrolled to keep the selection visible
pub struct EventListWidget<'a> {
    events: &'a [CampusEvent],
    selected: Option<usize>,
    title_style: Style,
    muted_style: Style,
    highlight_style: Style,
}

impl<'a> EventListWidget<'a> {
    pub fn new(events: &'a [CampusEvent]) -> Self {
        Self {
            events,
            selected: None,
            title_style: Style::default().bold(),
            muted_style: Style::default().fg(Color::DarkGray),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn select(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn muted_style(mut self, style: Style) -> Self {
        self.muted_style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    fn item(&self, event: &'a CampusEvent, width: usize) -> ListItem<'a> {
        let heading = Line::from(vec![
            Span::styled(event.name().to_string(), self.title_style),
            Span::raw("  "),
            Span::styled(format!("[{}]", event.kind()), self.muted_style),
        ]);
        let when = Line::styled(
            format!("{} at {}", event.formatted_date(), event.formatted_time()),
            self.muted_style,
        );
        let description = Line::raw(truncate_width(event.description(), width));
        ListItem::new(vec![heading, when, description, Line::default()])
    }
}

impl Widget for EventListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let width = usize::from(area.width.saturating_sub(2));
        let items: Vec<_> = self
            .events
            .iter()
            .map(|event| self.item(event, width))
            .collect();
        let list = List::new(items)
            .highlight_style(self.highlight_style)
            .highlight_symbol("▌ ");

        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
