use serde::{Deserialize, Serialize};

pub mod auth;
pub mod dashboard;
pub mod preview;
pub mod system;
pub mod text_field;

use crate::{
    core::cmd::Cmd,
    domain::student::Student,
    infrastructure::config::Config,
};
use auth::AuthState;
use dashboard::DashboardState;
use system::SystemState;

/// Identifies one landing or logged-in period.
///
/// A fresh id is handed out on every login and logout. Requests carry the id
/// of the view that issued them so that late replies can be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    pub fn next(self) -> Self {
        SessionId(self.0.wrapping_add(1))
    }
}

/// Which of the two top-level views is showing
#[derive(Debug, Clone)]
pub enum View {
    Landing(AuthState),
    Dashboard(Box<DashboardState>),
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub view: View,
    pub system: SystemState,
    pub config: ConfigState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Landing(AuthState::new(SessionId::default())),
            system: SystemState::default(),
            config: ConfigState::default(),
        }
    }
}

impl AppState {
    /// Initialize AppState on the landing view with the given config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Initialize AppState on the static sample dashboard
    pub fn preview(config: Config) -> Self {
        let session = SessionId::default().next();
        Self {
            view: View::Dashboard(Box::new(preview::sample_dashboard(session))),
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }

    pub fn session(&self) -> SessionId {
        match &self.view {
            View::Landing(auth) => auth.session(),
            View::Dashboard(dashboard) => dashboard.session(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.view, View::Dashboard(_))
    }

    pub fn student(&self) -> Option<&Student> {
        self.dashboard().map(DashboardState::student)
    }

    pub fn auth(&self) -> Option<&AuthState> {
        match &self.view {
            View::Landing(auth) => Some(auth),
            View::Dashboard(_) => None,
        }
    }

    pub fn auth_mut(&mut self) -> Option<&mut AuthState> {
        match &mut self.view {
            View::Landing(auth) => Some(auth),
            View::Dashboard(_) => None,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardState> {
        match &self.view {
            View::Dashboard(dashboard) => Some(dashboard),
            View::Landing(_) => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut DashboardState> {
        match &mut self.view {
            View::Dashboard(dashboard) => Some(dashboard),
            View::Landing(_) => None,
        }
    }

    /// Switches to the dashboard for `student` and returns the initial loads
    pub fn login(&mut self, student: Student) -> Vec<Cmd> {
        let mut dashboard = DashboardState::new(self.session().next(), student);
        let cmds = dashboard.initial_loads();
        self.view = View::Dashboard(Box::new(dashboard));
        cmds
    }

    /// Drops the student and everything fetched for them
    pub fn logout(&mut self) {
        self.view = View::Landing(AuthState::new(self.session().next()));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::cmd::ApiRequest;

    fn student() -> Student {
        Student {
            username: "butch".to_string(),
            first_name: Some("Butch".to_string()),
            last_name: Some("Cougar".to_string()),
            major: Some("Computer Science".to_string()),
            id: Some("7".to_string()),
        }
    }

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(!state.is_logged_in());
        assert!(state.auth().is_some());
        assert!(state.student().is_none());
        assert_eq!(state.session(), SessionId(0));
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_login_switches_view_and_session() {
        let mut state = AppState::default();
        let cmds = state.login(student());

        assert!(state.is_logged_in());
        assert_eq!(state.session(), SessionId(1));
        assert_eq!(state.student().map(|s| s.username.as_str()), Some("butch"));

        let requests: Vec<ApiRequest> = cmds
            .into_iter()
            .filter_map(|cmd| match cmd {
                Cmd::Api(call) => {
                    assert_eq!(call.session, SessionId(1));
                    Some(call.request)
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            requests,
            vec![
                ApiRequest::FetchEvents {
                    major: "Computer Science".to_string()
                },
                ApiRequest::FetchCourseHistory {
                    user_id: "7".to_string()
                },
                ApiRequest::FetchCourseCatalog,
            ]
        );
    }

    #[test]
    fn test_logout_discards_student() {
        let mut state = AppState::default();
        state.login(student());
        state.logout();

        assert!(!state.is_logged_in());
        assert!(state.student().is_none());
        assert_eq!(state.session(), SessionId(2));
    }

    #[test]
    fn test_preview_is_logged_in_without_commands() {
        let state = AppState::preview(Config::default());
        assert!(state.is_logged_in());
        assert_eq!(
            state.student().and_then(|s| s.first_name.as_deref()),
            Some("Kevin")
        );
    }

    #[test]
    fn test_session_id_next() {
        assert_eq!(SessionId(0).next(), SessionId(1));
        assert_eq!(SessionId(u64::MAX).next(), SessionId(0));
    }
}
