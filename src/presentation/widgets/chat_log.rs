use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::{
    chat::{ChatEntry, ChatRole},
    text::wrap_text,
};

/// The assistant transcript, pinned to the newest entry.
/// `scroll` counts lines back from the bottom.
pub struct ChatLogWidget<'a> {
    entries: &'a [ChatEntry],
    scroll: usize,
    pending: bool,
    student_style: Style,
    assistant_style: Style,
    error_style: Style,
    muted_style: Style,
}

impl<'a> ChatLogWidget<'a> {
    pub fn new(entries: &'a [ChatEntry]) -> Self {
        Self {
            entries,
            scroll: 0,
            pending: false,
            student_style: Style::default().fg(Color::Cyan),
            assistant_style: Style::default().fg(Color::Green),
            error_style: Style::default().fg(Color::Red),
            muted_style: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    pub fn role_styles(mut self, student: Style, assistant: Style, error: Style) -> Self {
        self.student_style = student;
        self.assistant_style = assistant;
        self.error_style = error;
        self
    }

    pub fn muted_style(mut self, style: Style) -> Self {
        self.muted_style = style;
        self
    }

    fn role_style(&self, role: ChatRole) -> Style {
        match role {
            ChatRole::Student => self.student_style,
            ChatRole::Assistant => self.assistant_style,
            ChatRole::Error => self.error_style,
        }
    }

    /// Every transcript line wrapped to `width`
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for entry in self.entries {
            lines.push(Line::styled(
                entry.role.to_string(),
                self.role_style(entry.role).bold(),
            ));
            let text_style = match entry.role {
                ChatRole::Error => self.error_style,
                _ => Style::default(),
            };
            lines.extend(
                wrap_text(&entry.text, width)
                    .lines()
                    .map(|line| Line::styled(line.to_string(), text_style)),
            );
            lines.push(Line::default());
        }
        if self.pending {
            lines.push(Line::styled("Assistant is typing...", self.muted_style));
        }
        lines
    }
}

impl Widget for ChatLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let height = usize::from(area.height);
        let lines = self.lines(usize::from(area.width));
        let max_scroll = lines.len().saturating_sub(height);
        let end = lines.len() - self.scroll.min(max_scroll);
        let start = end.saturating_sub(height);

        Paragraph::new(lines[start..end].to_vec()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rendered_lines(widget: ChatLogWidget, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn transcript() -> Vec<ChatEntry> {
        vec![
            ChatEntry::student("What should I take next?"),
            ChatEntry::assistant("CPTS 223"),
        ]
    }

    #[test]
    fn test_lines_include_roles() {
        let entries = transcript();
        let lines: Vec<String> = ChatLogWidget::new(&entries)
            .lines(40)
            .iter()
            .map(|line| line.to_string())
            .collect();

        assert_eq!(
            lines,
            vec!["You", "What should I take next?", "", "Assistant", "CPTS 223", ""]
        );
    }

    #[test]
    fn test_long_text_is_wrapped() {
        let entries = vec![ChatEntry::assistant("abcdefghij")];
        let lines = ChatLogWidget::new(&entries).lines(4);

        assert_eq!(lines.len(), 1 + 3 + 1);
    }

    #[test]
    fn test_pinned_to_bottom() {
        let entries = transcript();
        let lines = rendered_lines(ChatLogWidget::new(&entries).pending(true), 40, 3);

        assert_eq!(lines, vec!["CPTS 223", "", "Assistant is typing..."]);
    }

    #[test]
    fn test_scroll_back() {
        let entries = transcript();
        let lines = rendered_lines(ChatLogWidget::new(&entries).scroll(3), 40, 2);

        assert_eq!(lines, vec!["What should I take next?", ""]);
    }

    #[test]
    fn test_scroll_past_top_shows_beginning() {
        let entries = transcript();
        let lines = rendered_lines(ChatLogWidget::new(&entries).scroll(100), 40, 2);

        assert_eq!(lines, vec!["You", "What should I take next?"]);
    }
}
