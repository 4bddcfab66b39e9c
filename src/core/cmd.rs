use serde::{Deserialize, Serialize};

use crate::{
    core::state::SessionId,
    domain::student::NewStudent,
    infrastructure::api::{ChatRequest, RecommendRequest},
};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// A backend request, described without any transport detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiRequest {
    FetchStudent { username: String },
    CreateStudent(NewStudent),
    FetchEvents { major: String },
    FetchCourseHistory { user_id: String },
    FetchCourseCatalog,
    Chat(ChatRequest),
    RecommendCourses(RecommendRequest),
}

impl ApiRequest {
    pub fn name(&self) -> &'static str {
        match self {
            ApiRequest::FetchStudent { .. } => "FetchStudent",
            ApiRequest::CreateStudent(_) => "CreateStudent",
            ApiRequest::FetchEvents { .. } => "FetchEvents",
            ApiRequest::FetchCourseHistory { .. } => "FetchCourseHistory",
            ApiRequest::FetchCourseCatalog => "FetchCourseCatalog",
            ApiRequest::Chat(_) => "Chat",
            ApiRequest::RecommendCourses(_) => "RecommendCourses",
        }
    }
}

/// A request tagged with the session that issued it, so that replies
/// arriving after logout can be told apart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCall {
    pub session: SessionId,
    pub request: ApiRequest,
}

impl ApiCall {
    pub fn new(session: SessionId, request: ApiRequest) -> Self {
        Self { session, request }
    }
}

/// Elm-like command definitions
/// Represents side effects (network communication, terminal control, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    // Backend requests
    Api(ApiCall),

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
}

impl Cmd {
    pub fn api(session: SessionId, request: ApiRequest) -> Cmd {
        Cmd::Api(ApiCall::new(session, request))
    }

    pub fn name(&self) -> String {
        match self {
            Cmd::Api(call) => format!("Api({})", call.request.name()),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
        }
    }
}
