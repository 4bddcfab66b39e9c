use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    core::state::SessionId,
    domain::{course::Course, event::CampusEvent, student::NewStudent},
    infrastructure::api::{CreateStudentResponse, FetchStudentResponse},
};

/// Outcome of one backend request. Errors are flattened to display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiResponse {
    StudentFetched(Result<FetchStudentResponse, String>),
    StudentCreated {
        student: NewStudent,
        result: Result<CreateStudentResponse, String>,
    },
    EventsFetched(Result<Vec<CampusEvent>, String>),
    CourseHistoryFetched(Result<Vec<Course>, String>),
    CourseCatalogFetched(Result<Vec<Value>, String>),
    ChatReplied(Result<String, String>),
    CoursesRecommended(Result<String, String>),
}

/// Raw external events before any interpretation against application state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // Terminal events
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    Tick,
    Render,

    // Process control
    Quit,
    Suspend,
    Resume,

    // Backend replies
    Api {
        session: SessionId,
        response: ApiResponse,
    },

    // Free-form notifications from services
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
