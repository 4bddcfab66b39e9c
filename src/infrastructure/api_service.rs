use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::{ApiCall, ApiRequest},
        raw_msg::{ApiResponse, RawMsg},
    },
    infrastructure::api::{ApiClient, ApiError},
};

/// ApiService performs backend requests off the UI loop.
///
/// Each request runs on its own task, so replies come back in whatever order
/// the backend answers them.
pub struct ApiService {
    client: ApiClient,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<ApiCall>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewApiService = (
    mpsc::UnboundedSender<ApiCall>, // op_tx - requests to perform
    CancellationToken,              // shutdown signal
    ApiService,
);

impl ApiService {
    pub fn new(client: ApiClient, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewApiService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                client,
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the ApiService in background task
    pub fn run(self) -> JoinHandle<()> {
        tokio::spawn(self.run_service())
    }

    /// Main service loop
    async fn run_service(mut self) {
        log::info!("ApiService started against {}", self.client.base_url());

        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(call) => self.dispatch(call),
                        None => {
                            log::info!("ApiService request channel closed");
                            break;
                        }
                    }
                }

                // Check for termination signal
                _ = self.cancel_token.cancelled() => {
                    log::info!("ApiService received cancellation signal");
                    break;
                }
            }
        }
    }

    fn dispatch(&self, call: ApiCall) {
        log::debug!("Handling {} for session {}", call.request.name(), call.session.0);

        let client = self.client.clone();
        let raw_tx = self.raw_tx.clone();
        tokio::spawn(async move {
            let response = perform(&client, call.request).await;
            if raw_tx
                .send(RawMsg::Api {
                    session: call.session,
                    response,
                })
                .is_err()
            {
                log::debug!("Dropping API response: runtime is gone");
            }
        });
    }
}

/// Runs one request to completion and folds any error into the response
pub async fn perform(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::FetchStudent { username } => {
            ApiResponse::StudentFetched(flatten(client.fetch_student(&username).await))
        }
        ApiRequest::CreateStudent(student) => {
            let result = flatten(client.create_student(&student).await);
            ApiResponse::StudentCreated { student, result }
        }
        ApiRequest::FetchEvents { major } => {
            ApiResponse::EventsFetched(flatten(client.fetch_events(&major).await))
        }
        ApiRequest::FetchCourseHistory { user_id } => {
            ApiResponse::CourseHistoryFetched(flatten(client.fetch_course_history(&user_id).await))
        }
        ApiRequest::FetchCourseCatalog => {
            ApiResponse::CourseCatalogFetched(flatten(client.fetch_course_catalog().await))
        }
        ApiRequest::Chat(request) => ApiResponse::ChatReplied(flatten(client.chat(&request).await)),
        ApiRequest::RecommendCourses(request) => {
            ApiResponse::CoursesRecommended(flatten(client.recommend_courses(&request).await))
        }
    }
}

fn flatten<T>(result: Result<T, ApiError>) -> Result<T, String> {
    result.map_err(|e| {
        log::warn!("API request failed: {e}");
        e.to_string()
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::state::SessionId;

    #[tokio::test]
    async fn test_unreachable_backend_reports_error_with_session() {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        // Port 9 (discard) is not expected to run an HTTP server
        let (op_tx, cancel_token, service) =
            ApiService::new(ApiClient::new("http://127.0.0.1:9"), raw_tx);
        let handle = service.run();

        op_tx
            .send(ApiCall::new(SessionId(7), ApiRequest::FetchCourseCatalog))
            .unwrap();

        let raw = tokio::time::timeout(Duration::from_secs(10), raw_rx.recv())
            .await
            .unwrap()
            .unwrap();
        match raw {
            RawMsg::Api { session, response } => {
                assert_eq!(session, SessionId(7));
                assert!(matches!(response, ApiResponse::CourseCatalogFetched(Err(_))));
            }
            other => panic!("unexpected message: {other:?}"),
        }

        cancel_token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_service_stops_when_senders_drop() {
        let (raw_tx, _raw_rx) = mpsc::unbounded_channel();
        let (op_tx, _cancel_token, service) = ApiService::new(ApiClient::default(), raw_tx);
        let handle = service.run();

        drop(op_tx);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
