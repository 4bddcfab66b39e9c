use crate::{
    core::cmd::Cmd,
    core::msg::{dashboard::DashboardMsg, system::SystemMsg, Msg},
    core::state::{auth::AuthOutcome, AppState},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Landing form messages (delegated to AuthState)
        Msg::Auth(auth_msg) => {
            let Some(auth) = state.auth_mut() else {
                log::debug!("Ignoring {auth_msg:?} outside the landing view");
                return (state, vec![]);
            };

            match auth.update(auth_msg) {
                AuthOutcome::Stay(commands) => (state, commands),
                AuthOutcome::LoggedIn { student, status } => {
                    log::info!("Logged in as {}", student.username);
                    let mut commands = state.login(student);
                    commands.extend(state.system.update(SystemMsg::UpdateStatusMessage(status)));
                    (state, commands)
                }
            }
        }

        // Logging out swaps the whole view, so the coordinator owns it
        Msg::Dashboard(DashboardMsg::Logout) => {
            if state.is_logged_in() {
                log::info!("Logged out");
                state.logout();
                state.system.update(SystemMsg::ClearStatusMessage);
            }
            (state, vec![])
        }

        // Dashboard messages (delegated to DashboardState)
        Msg::Dashboard(dashboard_msg) => {
            let Some(dashboard) = state.dashboard_mut() else {
                log::debug!("Ignoring {dashboard_msg:?} outside the dashboard");
                return (state, vec![]);
            };
            let commands = dashboard.update(dashboard_msg);
            (state, commands)
        }
    }
}
