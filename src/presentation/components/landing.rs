//! Landing component
//!
//! The sign up / log in form shown while logged out.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{
        auth::{AuthMode, AuthState, FormField},
        AppState,
    },
    presentation::{config::Styles, widgets::text_field::TextFieldWidget},
};

const FORM_WIDTH: u16 = 60;
const FIELD_HEIGHT: u16 = 3;
const MAX_SUGGESTIONS: usize = 6;

/// Landing component
///
/// Stateless: everything it draws comes from `AuthState`.
#[derive(Debug, Clone, Default)]
pub struct LandingComponent;

impl LandingComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, auth: &AuthState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let form_area = centered(area, FORM_WIDTH);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.get_or("accent", Style::default().bold()))
            .title(Line::from(" New Coug ").centered())
            .padding(Padding::horizontal(1));
        let inner = card.inner(form_area);
        frame.render_widget(card, form_area);

        let fields = auth.mode().fields();
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.extend([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(2),
        ]);
        let rows = Layout::vertical(constraints).split(inner);

        let heading = Text::from(vec![
            Line::styled(
                auth.mode().to_string(),
                styles.get_or("title", Style::default().bold()),
            ),
            Line::styled(
                auth.mode().subtitle(),
                styles.get_or("muted", Style::default().fg(Color::DarkGray)),
            ),
        ]);
        frame.render_widget(Paragraph::new(heading), rows[0]);

        for (field, row) in fields.iter().zip(rows.iter().skip(1)) {
            let mut widget = TextFieldWidget::new(auth.field(*field), field.to_string())
                .focused(auth.focus() == *field)
                .focus_style(styles.get_or("accent", Style::default().bold()));
            if *field == FormField::Major {
                widget = widget.placeholder("Start typing to search majors");
            }
            frame.render_widget(widget, *row);
        }

        let below_fields = rows[fields.len() + 1];
        if auth.mode() == AuthMode::SignUp && auth.focus() == FormField::Major {
            self.render_suggestions(auth, styles, frame, below_fields);
        }

        let status_row = rows[fields.len() + 2];
        if auth.is_loading() {
            let loading = Paragraph::new("Please wait...")
                .style(styles.get_or("muted", Style::default().fg(Color::DarkGray)));
            frame.render_widget(loading, status_row);
        } else if let Some(alert) = auth.alert() {
            let alert = Paragraph::new(alert)
                .style(styles.get_or("alert", Style::default().fg(Color::Red).bold()));
            frame.render_widget(alert, status_row);
        }

        let hints = Paragraph::new(Text::from_iter(Self::hint_lines(auth.mode())))
            .style(styles.get_or("muted", Style::default().fg(Color::DarkGray)));
        frame.render_widget(hints, rows[fields.len() + 3]);
    }

    fn render_suggestions(&self, auth: &AuthState, styles: &Styles, frame: &mut Frame, area: Rect) {
        let suggestions = auth.suggestions();
        if suggestions.is_empty() {
            let empty = Paragraph::new("No matching majors")
                .style(styles.get_or("muted", Style::default().fg(Color::DarkGray)));
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = suggestions
            .iter()
            .take(MAX_SUGGESTIONS.max(auth.highlighted_suggestion().map_or(0, |i| i + 1)))
            .map(|major| ListItem::new(*major))
            .collect();
        let list = List::new(items)
            .highlight_style(styles.get_or("selected", Style::default().reversed()))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(auth.highlighted_suggestion());
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Keys that work on the form, with the mode switch named after its target
    pub fn hint_lines(mode: AuthMode) -> [String; 2] {
        [
            format!("Ctrl-T: {}", mode.switch_hint()),
            "Enter submit · Tab next field · Esc quit".to_string(),
        ]
    }
}

/// A column of at most `width` cells in the middle of `area`
fn centered(area: Rect, width: u16) -> Rect {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);
    column
}
