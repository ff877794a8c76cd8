//! Test doubles shared by module tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ApiClient, ApiError, ApiResult, HttpRequest, HttpResponse, Transport};
use crate::router::{Navigator, Page};
use crate::session::Session;

pub(crate) const TEST_BASE: &str = "http://api.test";

#[derive(Debug, Clone)]
pub(crate) enum MockReply {
    Respond(HttpResponse),
    NetworkDown,
    /// Never completes
    Pending,
}

impl MockReply {
    pub(crate) fn json(status: u16, body: &str) -> Self {
        MockReply::Respond(HttpResponse { status, body: body.to_string() })
    }
}

/// Transport answering from a path -> reply table
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    replies: Arc<Mutex<HashMap<String, MockReply>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub(crate) fn reply(&self, path: &str, reply: MockReply) -> &Self {
        self.replies.lock().unwrap().insert(path.to_string(), reply);
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_to(&self, path: &str) -> Option<HttpRequest> {
        self.requests().into_iter().find(|r| r.path == path)
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().get(&request.path).cloned();
        match reply {
            Some(MockReply::Respond(response)) => Ok(response),
            Some(MockReply::NetworkDown) => Err(ApiError::Network("connection refused".into())),
            Some(MockReply::Pending) => futures_util::future::pending().await,
            None => Ok(HttpResponse { status: 404, body: r#"{"detail":"Not Found"}"#.into() }),
        }
    }
}

pub(crate) fn client_with(session: &Session, transport: &MockTransport) -> ApiClient {
    ApiClient::new(TEST_BASE, session.clone(), transport.clone())
}

/// Canned payloads for the four dashboard endpoints
pub(crate) fn healthy_site(transport: &MockTransport) {
    transport
        .reply("/logs/", MockReply::json(200, r#"[{"id": 1, "date": "2024-05-01T07:30:00", "workers_count": 25}]"#))
        .reply(
            "/materials/",
            MockReply::json(200, r#"[{"id": 1, "ddt_number": "DDT-TEST", "batch_number": "BATCH-PV56", "non_conformity": false}]"#),
        )
        .reply(
            "/progress/",
            MockReply::json(
                200,
                r#"{"kpis": [{"id": 1, "kpi_name": "Module mounting", "progress_percent": 62.5, "target_date": null}],
                    "dashboard_summary": {"overall_progress_percent": 62.5, "overdue_milestones": 0, "milestones": []}}"#,
            ),
        )
        .reply(
            "/documents/",
            MockReply::json(200, r#"[{"id": 9, "file_type": "pdf", "notes": "Delivery note", "log_id": 1, "file_path": "uploads/x.pdf", "material_id": null}]"#),
        );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Navigation {
    Push(Page),
    Hard(Page),
}

/// Navigator that records instead of touching the browser
#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator {
    log: Arc<Mutex<Vec<Navigation>>>,
}

impl RecordingNavigator {
    pub(crate) fn history(&self) -> Vec<Navigation> {
        self.log.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> Option<Navigation> {
        self.history().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, page: Page) {
        self.log.lock().unwrap().push(Navigation::Push(page));
    }

    fn redirect(&self, page: Page) {
        self.log.lock().unwrap().push(Navigation::Hard(page));
    }
}
