use ratatui::{prelude::*, widgets::Tabs};
use strum::IntoEnumIterator;

use crate::core::state::dashboard::Tab;

/// Numbered dashboard tabs with the active one highlighted
#[derive(Debug, Clone)]
pub struct TabBarWidget {
    active: Tab,
    style: Style,
    highlight_style: Style,
}

impl TabBarWidget {
    pub fn new(active: Tab) -> Self {
        Self {
            active,
            style: Style::default(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    /// `1 Home`, `2 Roadmap`, ... matching the number keys
    pub fn titles() -> Vec<String> {
        Tab::iter()
            .map(|tab| format!("{} {tab}", tab.index() + 1))
            .collect()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Tabs::new(Self::titles())
            .select(self.active.index())
            .style(self.style)
            .highlight_style(self.highlight_style)
            .render(area, buf);
    }
}
