//! Assistant tab: chat transcript and the message input

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{dashboard::DashboardState, AppState},
    presentation::{
        config::Action,
        widgets::{chat_log::ChatLogWidget, text_field::TextFieldWidget},
    },
};

#[derive(Debug, Clone, Default)]
pub struct AssistantComponent;

impl AssistantComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, dashboard: &DashboardState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let styles = &config.styles;
        let muted = styles.get_or("muted", Style::default().fg(Color::DarkGray));
        let assistant = &dashboard.assistant;
        let [log_area, input_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

        if assistant.transcript.is_empty() && assistant.pending == 0 {
            frame.render_widget(
                Paragraph::new("Ask the assistant about courses, prerequisites or events.")
                    .style(muted)
                    .wrap(Wrap { trim: true }),
                log_area,
            );
        } else {
            let log = ChatLogWidget::new(&assistant.transcript)
                .scroll(assistant.scroll)
                .pending(assistant.pending > 0)
                .role_styles(
                    styles.get_or("student", Style::default().fg(Color::Cyan)),
                    styles.get_or("assistant", Style::default().fg(Color::Green)),
                    styles.get_or("error", Style::default().fg(Color::Red)),
                )
                .muted_style(muted);
            frame.render_widget(log, log_area);
        }

        let label = if assistant.input_focused {
            "Message (Enter send, Esc leave)".to_string()
        } else {
            match config.keybindings.hint(Action::FocusInput) {
                Some(key) => format!("Message (press {key} to type)"),
                None => "Message".to_string(),
            }
        };
        let input = TextFieldWidget::new(&assistant.input, label)
            .focused(assistant.input_focused)
            .focus_style(styles.get_or("accent", Style::default().bold()));
        frame.render_widget(input, input_area);
    }
}
