//! HTTP client for the student-portal backend

use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::{
    course::Course,
    event::CampusEvent,
    student::{NewStudent, Student},
};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Reply of `GET /fetch-student`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchStudentResponse {
    pub result: bool,
    #[serde(default)]
    pub user: Option<Student>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply of `POST /create-student`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStudentResponse {
    pub result: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateStudentEnvelope {
    #[serde(default)]
    result: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope {
    #[serde(default)]
    data: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct TextEnvelope {
    response: String,
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// Body of `POST /recommend-courses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub course_history: Vec<Course>,
    pub course_catalog: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET /fetch-student?username=`
    ///
    /// The backend answers unknown users with a 404 that still carries the
    /// `{result, message}` envelope; that envelope is returned as-is.
    pub async fn fetch_student(&self, username: &str) -> Result<FetchStudentResponse, ApiError> {
        let response = self
            .http
            .get(self.endpoint("fetch-student"))
            .query(&[("username", username)])
            .send()
            .await?;
        let (status, body) = read_body(response).await?;
        match serde_json::from_str::<FetchStudentResponse>(&body) {
            Ok(reply) => Ok(reply),
            Err(e) if status.is_success() => Err(ApiError::Decode(e)),
            Err(_) => Err(status_error(status, body)),
        }
    }

    /// `POST /create-student`
    ///
    /// A successful reply without a `result` field counts as success.
    pub async fn create_student(
        &self,
        student: &NewStudent,
    ) -> Result<CreateStudentResponse, ApiError> {
        let response = self
            .http
            .post(self.endpoint("create-student"))
            .json(student)
            .send()
            .await?;
        let (status, body) = read_body(response).await?;
        let envelope = serde_json::from_str::<CreateStudentEnvelope>(&body);
        match (status.is_success(), envelope) {
            (true, Ok(envelope)) => Ok(CreateStudentResponse {
                result: envelope.result.unwrap_or(true),
                message: envelope.message,
            }),
            (true, Err(e)) => Err(ApiError::Decode(e)),
            (
                false,
                Ok(CreateStudentEnvelope {
                    result: Some(result),
                    message,
                }),
            ) => Ok(CreateStudentResponse { result, message }),
            (false, _) => Err(status_error(status, body)),
        }
    }

    /// `GET /fetch-events?major=`
    pub async fn fetch_events(&self, major: &str) -> Result<Vec<CampusEvent>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("fetch-events"))
            .query(&[("major", major)])
            .send()
            .await?;
        let rows = read_data(response).await?;
        Ok(decode_rows(rows, "event"))
    }

    /// `GET /fetch-course-history?user_id=`
    pub async fn fetch_course_history(&self, user_id: &str) -> Result<Vec<Course>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("fetch-course-history"))
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        let rows = read_data(response).await?;
        Ok(decode_rows(rows, "course"))
    }

    /// `GET /fetch-course-catalog`; entries are kept as opaque JSON objects
    pub async fn fetch_course_catalog(&self) -> Result<Vec<Value>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("fetch-course-catalog"))
            .send()
            .await?;
        read_data(response).await
    }

    /// `POST /chat`
    pub async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.endpoint("chat"))
            .json(request)
            .send()
            .await?;
        read_text_reply(response).await
    }

    /// `POST /recommend-courses`
    pub async fn recommend_courses(&self, request: &RecommendRequest) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.endpoint("recommend-courses"))
            .json(request)
            .send()
            .await?;
        read_text_reply(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

async fn read_body(response: Response) -> Result<(StatusCode, String), ApiError> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await?;
    log::debug!("{url} -> {status} ({} bytes)", body.len());
    Ok((status, body))
}

fn status_error(status: StatusCode, body: String) -> ApiError {
    ApiError::Status {
        status: status.as_u16(),
        body,
    }
}

async fn read_success<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let (status, body) = read_body(response).await?;
    if !status.is_success() {
        return Err(status_error(status, body));
    }
    Ok(serde_json::from_str(&body)?)
}

async fn read_data(response: Response) -> Result<Vec<Value>, ApiError> {
    let envelope: DataEnvelope = read_success(response).await?;
    Ok(envelope.data.unwrap_or_default())
}

async fn read_text_reply(response: Response) -> Result<String, ApiError> {
    let envelope: TextEnvelope = read_success(response).await?;
    Ok(envelope.response)
}

/// Decodes each row on its own so that one malformed record does not hide the rest
fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>, what: &str) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                log::warn!("Skipping malformed {what}: {e}");
                None
            }
        })
        .collect()
}
