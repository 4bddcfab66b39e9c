//! Status bar component
//!
//! Two lines at the bottom of the screen: who is logged in plus the most
//! useful keys, then the latest status message.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::config::{Action, KeyBindings},
};

const HINTED_ACTIONS: [(Action, &str); 5] = [
    (Action::NextTab, "next tab"),
    (Action::Refresh, "refresh"),
    (Action::RecommendCourses, "plan"),
    (Action::Logout, "log out"),
    (Action::Quit, "quit"),
];

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [info_area, message_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        frame.render_widget(Clear, info_area);
        frame.render_widget(Clear, message_area);

        let who = Span::styled(
            Self::user_label(state),
            styles.get_or("accent", Style::default().italic()),
        );
        let mut spans = vec![who];
        if state.is_logged_in() {
            spans.push(Span::styled(
                format!("  {}", Self::key_hints(&state.config.config.keybindings)),
                styles.get_or("muted", Style::default().fg(Color::DarkGray)),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), info_area);

        let message = state.system.status_message().cloned().unwrap_or_default();
        let style = if message.starts_with("Error:") {
            styles.get_or("error", Style::default().fg(Color::Red))
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(message).style(style), message_area);
    }

    /// `kevin (Computer Science)` when logged in
    pub fn user_label(state: &AppState) -> String {
        match state.student() {
            Some(student) => match student.major.as_deref() {
                Some(major) => format!("{} ({major})", student.username),
                None => student.username.clone(),
            },
            None => "Not logged in".to_string(),
        }
    }

    /// `tab next tab · r refresh · ...` for the actions that have a binding
    pub fn key_hints(keybindings: &KeyBindings) -> String {
        HINTED_ACTIONS
            .iter()
            .filter_map(|(action, label)| keybindings.hint(*action).map(|key| format!("{key} {label}")))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
