use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::TextArea;

/// A single-line text input backed by `tui-textarea`
#[derive(Debug, Clone, Default)]
pub struct TextField {
    textarea: TextArea<'static>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let mut field = Self::new();
        field.insert_str(value);
        field
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn value(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn trimmed(&self) -> String {
        self.value().trim().to_string()
    }

    pub fn is_blank(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.trim().is_empty())
    }

    /// Feeds a key to the field. Line breaks are never inserted.
    /// Returns true if the content changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if is_line_break(&key) {
            return false;
        }
        self.textarea.input(key)
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        let single_line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.textarea.insert_str(single_line)
    }

    pub fn set_value(&mut self, value: &str) {
        self.clear();
        self.insert_str(value);
    }

    pub fn clear(&mut self) {
        // Recreating the TextArea also drops its undo history; deleting the
        // selection instead leaves undo able to restore an invalid cursor.
        self.textarea = TextArea::default();
    }
}

fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
