use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
    core::{
        cmd::{ApiRequest, Cmd},
        msg::auth::AuthMsg,
        state::{text_field::TextField, SessionId},
    },
    domain::{
        majors::{filter_majors, resolve_major},
        student::{NewStudent, Student},
    },
    infrastructure::api::{CreateStudentResponse, FetchStudentResponse},
};

pub const SERVER_ERROR_ALERT: &str = "Server error. Make sure the backend is running.";
pub const USER_NOT_FOUND_ALERT: &str = "User not found.";
pub const SIGN_UP_FAILED_ALERT: &str = "Something went wrong.";
pub const LOGIN_STATUS: &str = "Looking up your plan...";
pub const SIGN_UP_STATUS: &str = "Generating your academic plan...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum AuthMode {
    #[default]
    #[strum(to_string = "Sign Up")]
    SignUp,
    #[strum(to_string = "Log In")]
    LogIn,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::SignUp => AuthMode::LogIn,
            AuthMode::LogIn => AuthMode::SignUp,
        }
    }

    /// Fields shown in this mode, top to bottom
    pub fn fields(self) -> &'static [FormField] {
        match self {
            AuthMode::SignUp => &[
                FormField::Username,
                FormField::FirstName,
                FormField::LastName,
                FormField::Major,
            ],
            AuthMode::LogIn => &[FormField::Username],
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::SignUp => "Create your student profile",
            AuthMode::LogIn => "Welcome back",
        }
    }

    /// Label of the link that switches to the other mode
    pub fn switch_hint(self) -> &'static str {
        match self {
            AuthMode::SignUp => "Already have an account? Log in",
            AuthMode::LogIn => "New here? Sign up",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum FormField {
    #[default]
    Username,
    #[strum(to_string = "First Name")]
    FirstName,
    #[strum(to_string = "Last Name")]
    LastName,
    Major,
}

impl FormField {
    fn missing_alert(self) -> &'static str {
        match self {
            FormField::Username => "Enter your username",
            FormField::FirstName => "Enter your first name",
            FormField::LastName => "Enter your last name",
            FormField::Major => "Select your major",
        }
    }
}

/// What the landing form wants the coordinator to do after a message
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Stay(Vec<Cmd>),
    LoggedIn { student: Student, status: String },
}

/// State of the sign up / log in form
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    session: SessionId,
    mode: AuthMode,
    focus: FormField,
    username: TextField,
    first_name: TextField,
    last_name: TextField,
    major: TextField,
    suggestion: Option<usize>,
    is_loading: bool,
    alert: Option<String>,
}

impl AuthState {
    pub fn new(session: SessionId) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn field(&self, field: FormField) -> &TextField {
        match field {
            FormField::Username => &self.username,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Major => &self.major,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut TextField {
        match field {
            FormField::Username => &mut self.username,
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Major => &mut self.major,
        }
    }

    /// Majors matching what has been typed into the major field
    pub fn suggestions(&self) -> Vec<&'static str> {
        filter_majors(&self.major.value())
    }

    /// Index into `suggestions()` of the highlighted entry
    pub fn highlighted_suggestion(&self) -> Option<usize> {
        self.suggestion
    }

    /// The major a submit would use: an exact match first, then the highlight
    pub fn selected_major(&self) -> Option<&'static str> {
        resolve_major(&self.major.value()).or_else(|| {
            self.suggestion
                .and_then(|index| self.suggestions().get(index).copied())
        })
    }

    pub fn update(&mut self, msg: AuthMsg) -> AuthOutcome {
        match msg {
            AuthMsg::ToggleMode => {
                self.mode = self.mode.toggle();
                self.focus = FormField::Username;
                self.suggestion = None;
                self.alert = None;
                AuthOutcome::Stay(vec![])
            }
            AuthMsg::FocusNext => {
                self.move_focus(1);
                AuthOutcome::Stay(vec![])
            }
            AuthMsg::FocusPrev => {
                self.move_focus(-1);
                AuthOutcome::Stay(vec![])
            }
            AuthMsg::NextSuggestion => {
                self.move_suggestion(true);
                AuthOutcome::Stay(vec![])
            }
            AuthMsg::PrevSuggestion => {
                self.move_suggestion(false);
                AuthOutcome::Stay(vec![])
            }
            AuthMsg::Input(key) => {
                if !self.is_loading && self.field_mut(self.focus).input(key) {
                    self.on_edit();
                }
                AuthOutcome::Stay(vec![])
            }
            AuthMsg::Paste(text) => {
                if !self.is_loading && self.field_mut(self.focus).insert_str(&text) {
                    self.on_edit();
                }
                AuthOutcome::Stay(vec![])
            }
            AuthMsg::Submit => AuthOutcome::Stay(self.submit()),
            AuthMsg::StudentFetched(result) => {
                self.is_loading = false;
                self.on_student_fetched(result)
            }
            AuthMsg::StudentCreated { student, result } => {
                self.is_loading = false;
                self.on_student_created(student, result)
            }
        }
    }

    fn move_focus(&mut self, step: isize) {
        let fields = self.mode.fields();
        let current = fields
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0);
        let len = fields.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.focus = fields[next];
    }

    fn move_suggestion(&mut self, forward: bool) {
        if self.focus != FormField::Major {
            return;
        }
        let count = self.suggestions().len();
        if count == 0 {
            self.suggestion = None;
            return;
        }
        self.suggestion = Some(match (self.suggestion, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(index), true) => (index + 1) % count,
            (Some(index), false) => (index + count - 1) % count,
        });
    }

    fn on_edit(&mut self) {
        if self.focus == FormField::Major {
            self.suggestion = None;
        }
    }

    fn submit(&mut self) -> Vec<Cmd> {
        if self.is_loading {
            return vec![];
        }

        if let Some(field) = self
            .mode
            .fields()
            .iter()
            .copied()
            .find(|field| self.field(*field).is_blank())
        {
            self.reject(field);
            return vec![];
        }

        let request = match self.mode {
            AuthMode::LogIn => ApiRequest::FetchStudent {
                username: self.username.trimmed(),
            },
            AuthMode::SignUp => {
                let Some(major) = self.selected_major() else {
                    self.reject(FormField::Major);
                    return vec![];
                };
                self.major.set_value(major);
                self.suggestion = None;
                ApiRequest::CreateStudent(NewStudent {
                    username: self.username.trimmed(),
                    first_name: self.first_name.trimmed(),
                    last_name: self.last_name.trimmed(),
                    major: major.to_string(),
                })
            }
        };

        log::info!("Submitting {} form", self.mode);
        self.is_loading = true;
        self.alert = None;
        vec![Cmd::api(self.session, request)]
    }

    fn reject(&mut self, field: FormField) {
        self.alert = Some(field.missing_alert().to_string());
        self.focus = field;
    }

    fn on_student_fetched(&mut self, result: Result<FetchStudentResponse, String>) -> AuthOutcome {
        match result {
            Ok(reply) if reply.result => {
                let student = reply
                    .user
                    .unwrap_or_else(|| Student::new(self.username.trimmed()));
                AuthOutcome::LoggedIn {
                    student,
                    status: LOGIN_STATUS.to_string(),
                }
            }
            Ok(reply) => {
                self.alert = Some(
                    reply
                        .message
                        .unwrap_or_else(|| USER_NOT_FOUND_ALERT.to_string()),
                );
                AuthOutcome::Stay(vec![])
            }
            Err(error) => self.server_error(error),
        }
    }

    fn on_student_created(
        &mut self,
        student: NewStudent,
        result: Result<CreateStudentResponse, String>,
    ) -> AuthOutcome {
        match result {
            Ok(reply) if reply.result => AuthOutcome::LoggedIn {
                student: student.into(),
                status: SIGN_UP_STATUS.to_string(),
            },
            Ok(reply) => {
                self.alert = Some(
                    reply
                        .message
                        .unwrap_or_else(|| SIGN_UP_FAILED_ALERT.to_string()),
                );
                AuthOutcome::Stay(vec![])
            }
            Err(error) => self.server_error(error),
        }
    }

    fn server_error(&mut self, error: String) -> AuthOutcome {
        self.alert = Some(SERVER_ERROR_ALERT.to_string());
        AuthOutcome::Stay(vec![Cmd::LogError { message: error }])
    }
}
