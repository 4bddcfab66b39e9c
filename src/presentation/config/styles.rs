use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de, Deserialize, Deserializer};

/// Named styles such as `accent` or `error`, written as `"bold yellow on black"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// The named style, or `fallback` when the name is not configured
    pub fn get_or(&self, name: &str, fallback: Style) -> Style {
        self.get(name).copied().unwrap_or(fallback)
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| {
                parse_style(&raw)
                    .map(|style| (name, style))
                    .map_err(de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parses `[modifiers] [foreground] [on background]`.
///
/// Colors are anything ratatui understands: names (`lightred`), indexes
/// (`208`) or hex (`#981e32`).
pub fn parse_style(line: &str) -> Result<Style, String> {
    let line = line.trim().to_lowercase();
    let (foreground, background) = match line.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => match line.strip_prefix("on ") {
            Some(bg) => ("", Some(bg)),
            None => (line.as_str(), None),
        },
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        match parse_modifier(word) {
            Some(modifier) => style = style.add_modifier(modifier),
            None => style = style.fg(parse_color(word)?),
        }
    }
    if let Some(background) = background {
        style = style.bg(parse_color(background.trim())?);
    }

    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "inverse" | "reversed" => Some(Modifier::REVERSED),
        _ => None,
    }
}

fn parse_color(raw: &str) -> Result<Color, String> {
    Color::from_str(&raw.replace("grey", "gray")).map_err(|_| format!("Unknown color `{raw}`"))
}
