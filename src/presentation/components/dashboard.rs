//! Dashboard component
//!
//! Tab bar plus the content of the active tab.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{
        dashboard::{DashboardState, Tab},
        AppState,
    },
    domain::loadable::Loadable,
    presentation::{config::Styles, widgets::tab_bar::TabBarWidget},
};

pub mod assistant;
pub mod events;
pub mod home;
pub mod profile;
pub mod roadmap;

pub use assistant::AssistantComponent;
pub use events::EventsComponent;
pub use home::HomeComponent;
pub use profile::ProfileComponent;
pub use roadmap::RoadmapComponent;

/// Dashboard component
///
/// Delegates the content area to one child component per tab.
#[derive(Debug, Clone, Default)]
pub struct DashboardComponent {
    home: HomeComponent,
    roadmap: RoadmapComponent,
    events: EventsComponent,
    profile: ProfileComponent,
    assistant: AssistantComponent,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, state: &AppState, dashboard: &DashboardState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let [tabs_area, content_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let tab_bar = TabBarWidget::new(dashboard.active_tab)
            .style(styles.get_or("muted", Style::default()))
            .highlight_style(styles.get_or("tab_active", Style::default().reversed()));
        frame.render_widget(tab_bar, tabs_area);

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles.get_or("muted", Style::default().fg(Color::DarkGray)))
            .padding(Padding::horizontal(1));
        let inner = block.inner(content_area);
        frame.render_widget(block, content_area);

        match dashboard.active_tab {
            Tab::Home => self.home.view(state, dashboard, frame, inner),
            Tab::Roadmap => self.roadmap.view(state, dashboard, frame, inner),
            Tab::Events => self.events.view(state, dashboard, frame, inner),
            Tab::Profile => self.profile.view(state, dashboard, frame, inner),
            Tab::Assistant => self.assistant.view(state, dashboard, frame, inner),
        }
    }
}

/// What to show instead of a section that has nothing loaded yet
pub fn section_placeholder<T>(section: &Loadable<T>, idle_hint: &str) -> Option<String> {
    match section {
        Loadable::Idle => Some(idle_hint.to_string()),
        Loadable::Loading => Some("Loading...".to_string()),
        Loadable::Failed(error) => Some(format!("Could not load: {error}")),
        Loadable::Loaded(_) => None,
    }
}

/// Renders the placeholder for `section` and returns true, or returns false when it is loaded
pub fn render_placeholder<T>(
    section: &Loadable<T>,
    idle_hint: &str,
    styles: &Styles,
    frame: &mut Frame,
    area: Rect,
) -> bool {
    let Some(text) = section_placeholder(section, idle_hint) else {
        return false;
    };
    let style = if section.error().is_some() {
        styles.get_or("error", Style::default().fg(Color::Red))
    } else {
        styles.get_or("muted", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(
        Paragraph::new(text).style(style).wrap(Wrap { trim: true }),
        area,
    );
    true
}

/// Bold section heading
pub fn heading<'a>(text: impl Into<String>, styles: &Styles) -> Line<'a> {
    Line::styled(text.into(), styles.get_or("title", Style::default().bold()))
}
