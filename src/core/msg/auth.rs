use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::{
    domain::student::NewStudent,
    infrastructure::api::{CreateStudentResponse, FetchStudentResponse},
};

/// Messages for the landing (sign up / log in) form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuthMsg {
    ToggleMode,
    FocusNext,
    FocusPrev,
    NextSuggestion,
    PrevSuggestion,
    Input(KeyEvent),
    Paste(String),
    Submit,

    // Backend replies
    StudentFetched(Result<FetchStudentResponse, String>),
    StudentCreated {
        student: NewStudent,
        result: Result<CreateStudentResponse, String>,
    },
}

impl AuthMsg {
    /// Keystrokes arrive constantly while typing
    pub fn is_frequent(&self) -> bool {
        matches!(self, AuthMsg::Input(_))
    }
}
