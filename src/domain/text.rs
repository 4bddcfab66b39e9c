use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hard-wraps `s` so that no line is wider than `width` display columns.
/// Existing line breaks are kept.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    s.lines()
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut wrapped = String::with_capacity(line.len());
    let mut current_width = 0;
    for c in line.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width && current_width > 0 {
            wrapped.push('\n');
            current_width = 0;
        }
        wrapped.push(c);
        current_width += char_width;
    }
    wrapped
}

/// Cuts a single line down to `width` columns, marking the cut with `…`
pub fn truncate_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width - 1 {
            break;
        }
        truncated.push(c);
        current_width += char_width;
    }
    truncated.push('…');
    truncated
}
