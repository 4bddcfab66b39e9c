//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::{AppState, View};

pub mod dashboard;
pub mod landing;
pub mod status_bar;

pub use dashboard::DashboardComponent;
pub use landing::LandingComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub landing: LandingComponent,
    pub dashboard: DashboardComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point: the current view above a two-line status bar
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(frame.area());

        match &state.view {
            View::Landing(auth) => self.landing.view(state, auth, frame, main_area),
            View::Dashboard(dashboard) => self.dashboard.view(state, dashboard, frame, main_area),
        }

        self.status_bar.view(state, frame, status_area);
    }
}
