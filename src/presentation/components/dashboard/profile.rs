//! Profile tab

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{dashboard::DashboardState, AppState},
    presentation::{components::dashboard::heading, config::Action},
};

#[derive(Debug, Clone, Default)]
pub struct ProfileComponent;

impl ProfileComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, dashboard: &DashboardState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let styles = &config.styles;
        let student = dashboard.student();
        let label = styles.get_or("title", Style::default().bold());
        let row = |name: &'static str, value: String| {
            Line::from(vec![Span::styled(format!("{name:<10}"), label), Span::raw(value)])
        };

        let mut lines = vec![
            heading("Profile", styles),
            Line::default(),
            row("Username", student.username.clone()),
            row("Name", student.full_name()),
            row("Major", student.major.clone().unwrap_or_else(|| "-".to_string())),
        ];
        if let Some(id) = &student.id {
            lines.push(row("Student #", id.clone()));
        }
        if let Some(key) = config.keybindings.hint(Action::Logout) {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("Press {key} to log out"),
                styles.get_or("muted", Style::default().fg(Color::DarkGray)),
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
