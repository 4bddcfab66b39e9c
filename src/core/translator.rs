use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{auth::AuthMsg, dashboard::DashboardMsg, system::SystemMsg, Msg},
        raw_msg::{ApiResponse, RawMsg},
        state::{
            auth::{AuthState, FormField},
            dashboard::{DashboardState, Tab},
            AppState, View,
        },
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on the active view and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        // Backend replies - only for the view that asked
        RawMsg::Api { session, response } => {
            if session != state.session() {
                log::debug!(
                    "Dropping stale response for session {} (current {})",
                    session.0,
                    state.session().0
                );
                return vec![];
            }
            translate_api_response(response, state)
        }

        // System events
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match &state.view {
        View::Landing(auth) => translate_landing_keys(key, auth),
        View::Dashboard(dashboard) if dashboard.assistant.input_focused => {
            translate_input_mode_keys(key)
        }
        View::Dashboard(dashboard) => translate_dashboard_keys(key, dashboard, state),
    }
}

/// Fixed key bindings of the sign up / log in form
fn translate_landing_keys(key: KeyEvent, auth: &AuthState) -> Vec<Msg> {
    let on_major = auth.focus() == FormField::Major;
    let msg = match key.code {
        KeyCode::Esc => return vec![Msg::System(SystemMsg::Quit)],
        KeyCode::Enter => AuthMsg::Submit,
        KeyCode::Tab => AuthMsg::FocusNext,
        KeyCode::BackTab => AuthMsg::FocusPrev,
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            AuthMsg::ToggleMode
        }
        KeyCode::Down if on_major => AuthMsg::NextSuggestion,
        KeyCode::Up if on_major => AuthMsg::PrevSuggestion,
        KeyCode::Down => AuthMsg::FocusNext,
        KeyCode::Up => AuthMsg::FocusPrev,
        _ => AuthMsg::Input(key),
    };
    vec![Msg::Auth(msg)]
}

/// Key bindings while the assistant input has focus
fn translate_input_mode_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter => vec![Msg::Dashboard(DashboardMsg::SendChat)],
        KeyCode::Esc => vec![Msg::Dashboard(DashboardMsg::BlurInput)],
        // Everything else edits the input
        _ => vec![Msg::Dashboard(DashboardMsg::Input(key))],
    }
}

/// Key bindings when navigating the dashboard
fn translate_dashboard_keys(key: KeyEvent, dashboard: &DashboardState, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(*action, dashboard),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action, dashboard: &DashboardState) -> Vec<Msg> {
    let msg = match action {
        Action::Quit => return vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => return vec![Msg::System(SystemMsg::Suspend)],
        Action::NextTab => DashboardMsg::NextTab,
        Action::PrevTab => DashboardMsg::PrevTab,
        Action::ShowHome => DashboardMsg::SelectTab(Tab::Home),
        Action::ShowRoadmap => DashboardMsg::SelectTab(Tab::Roadmap),
        Action::ShowEvents => DashboardMsg::SelectTab(Tab::Events),
        Action::ShowProfile => DashboardMsg::SelectTab(Tab::Profile),
        Action::ShowAssistant => DashboardMsg::SelectTab(Tab::Assistant),
        Action::ScrollUp => DashboardMsg::ScrollUp,
        Action::ScrollDown => DashboardMsg::ScrollDown,
        Action::ScrollPlanUp | Action::ScrollPlanDown if dashboard.active_tab != Tab::Roadmap => {
            return vec![]
        }
        Action::ScrollPlanUp => DashboardMsg::ScrollPlanUp,
        Action::ScrollPlanDown => DashboardMsg::ScrollPlanDown,
        Action::CycleCourseFilter if dashboard.active_tab == Tab::Roadmap => {
            DashboardMsg::CycleCourseFilter
        }
        Action::CycleCourseFilter => {
            return vec![Msg::System(SystemMsg::UpdateStatusMessage(
                "The course filter lives on the Roadmap tab".to_string(),
            ))]
        }
        Action::Refresh => DashboardMsg::Refresh,
        Action::RecommendCourses if dashboard.recommendation.is_loading() => {
            return vec![Msg::System(SystemMsg::UpdateStatusMessage(
                "Still working on your recommendations...".to_string(),
            ))]
        }
        Action::RecommendCourses => {
            return vec![
                Msg::Dashboard(DashboardMsg::SelectTab(Tab::Roadmap)),
                Msg::Dashboard(DashboardMsg::RecommendCourses),
            ]
        }
        Action::FocusInput => DashboardMsg::FocusInput,
        Action::Logout => DashboardMsg::Logout,
    };
    vec![Msg::Dashboard(msg)]
}

fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    match &state.view {
        View::Landing(_) => vec![Msg::Auth(AuthMsg::Paste(text))],
        View::Dashboard(dashboard) if dashboard.assistant.input_focused => {
            vec![Msg::Dashboard(DashboardMsg::Paste(text))]
        }
        View::Dashboard(_) => vec![],
    }
}

fn translate_api_response(response: ApiResponse, state: &AppState) -> Vec<Msg> {
    let msg = match response {
        ApiResponse::StudentFetched(result) => Msg::Auth(AuthMsg::StudentFetched(result)),
        ApiResponse::StudentCreated { student, result } => {
            Msg::Auth(AuthMsg::StudentCreated { student, result })
        }
        ApiResponse::EventsFetched(result) => Msg::Dashboard(DashboardMsg::EventsLoaded(result)),
        ApiResponse::CourseHistoryFetched(result) => {
            Msg::Dashboard(DashboardMsg::CourseHistoryLoaded(result))
        }
        ApiResponse::CourseCatalogFetched(result) => {
            Msg::Dashboard(DashboardMsg::CatalogLoaded(result))
        }
        ApiResponse::ChatReplied(result) => Msg::Dashboard(DashboardMsg::ChatReplied(result)),
        ApiResponse::CoursesRecommended(result) => {
            Msg::Dashboard(DashboardMsg::RecommendationReceived(result))
        }
    };

    // A reply only makes sense to the view that issued the request
    let fits_view = matches!(
        (&msg, state.is_logged_in()),
        (Msg::Auth(_), false) | (Msg::Dashboard(_), true)
    );
    if fits_view {
        vec![msg]
    } else {
        vec![]
    }
}
