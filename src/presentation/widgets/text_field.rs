use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::core::state::text_field::TextField;

/// A bordered, labelled single-line input.
/// The cursor is only drawn while the field has focus.
pub struct TextFieldWidget<'a> {
    field: &'a TextField,
    label: String,
    focused: bool,
    focus_style: Style,
    placeholder: Option<&'a str>,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(field: &'a TextField, label: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
            focused: false,
            focus_style: Style::default().bold(),
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = style;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for TextFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut textarea = self.field.textarea().clone();
        let border_style = if self.focused {
            self.focus_style
        } else {
            Style::default().fg(Color::DarkGray)
        };
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(self.label),
        );
        textarea.set_cursor_line_style(Style::default());
        if !self.focused {
            textarea.set_cursor_style(Style::default());
        }
        if let Some(placeholder) = self.placeholder {
            textarea.set_placeholder_text(placeholder);
        }

        Widget::render(&textarea, area, buf);
    }
}
