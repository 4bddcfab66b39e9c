//! Events tab: campus events for the student's major

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{dashboard::DashboardState, AppState},
    presentation::{
        components::dashboard::{heading, render_placeholder},
        widgets::event_list::EventListWidget,
    },
};

#[derive(Debug, Clone, Default)]
pub struct EventsComponent;

impl EventsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, dashboard: &DashboardState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [title_area, list_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let title = match dashboard.student().major.as_deref() {
            Some(major) => format!("Events for {major}"),
            None => "Events".to_string(),
        };
        frame.render_widget(Paragraph::new(heading(title, styles)), title_area);

        if render_placeholder(
            &dashboard.events,
            "Add a major to your profile to see events",
            styles,
            frame,
            list_area,
        ) {
            return;
        }

        let events = dashboard.events.loaded().map(Vec::as_slice).unwrap_or_default();
        if events.is_empty() {
            frame.render_widget(
                Paragraph::new("No events for your major yet")
                    .style(styles.get_or("muted", Style::default().fg(Color::DarkGray))),
                list_area,
            );
            return;
        }

        let list = EventListWidget::new(events)
            .select(dashboard.selected_event)
            .title_style(styles.get_or("title", Style::default().bold()))
            .muted_style(styles.get_or("muted", Style::default().fg(Color::DarkGray)))
            .highlight_style(styles.get_or("selected", Style::default().reversed()));
        frame.render_widget(list, list_area);
    }
}
