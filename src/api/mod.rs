//! Site Manager API Client
//!
//! Every request passes through [`ApiClient`], which attaches the bearer
//! credential and turns a 401 on a session-guarded request into a session
//! expiry. Endpoint wrappers are organized by resource.

mod auth;
mod documents;
mod logs;
mod materials;
mod progress;
mod transport;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::session::Session;

pub use auth::*;
pub use documents::*;
pub use logs::*;
pub use materials::*;
pub use progress::*;
pub use transport::FetchTransport;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the credential; the session has already been cleared
    #[error("session expired")]
    SessionExpired,
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }

    /// Server-provided `detail` message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path relative to the API base, e.g. `/logs/`
    pub path: String,
    /// Absolute URL
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a fully prepared request
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> ApiResult<HttpResponse>;
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Only string details are shown to the user
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .detail?
        .as_str()
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

// ========================
// Client
// ========================

/// Whether a 401 on this request means the session is gone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guard {
    Session,
    Public,
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: Session,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, session: Session, transport: impl Transport + 'static) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            session,
            transport: Arc::new(transport),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Session-guarded GET
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.build(Method::Get, path, None);
        self.execute(request, Guard::Session).await
    }

    /// POST whose 401 is an ordinary failure (used by login)
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = self.build(Method::Post, path, Some(body));
        self.execute(request, Guard::Public).await
    }

    /// Request interceptor: attach the credential when present
    fn build(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = Vec::new();
        if let Some(token) = self.session.get() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method,
            path: path.to_string(),
            url: format!("{}{}", self.base, path),
            headers,
            body,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: HttpRequest, guard: Guard) -> ApiResult<T> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "request");
        let response = self.transport.send(&request).await?;
        tracing::debug!(status = response.status, path = %request.path, "response");
        self.intercept_response(&request, guard, response)
    }

    /// Response interceptor: 401 on a guarded request expires the session
    fn intercept_response<T: DeserializeOwned>(
        &self,
        request: &HttpRequest,
        guard: Guard,
        response: HttpResponse,
    ) -> ApiResult<T> {
        if response.status == 401 && guard == Guard::Session {
            tracing::warn!(path = %request.path, "credential rejected");
            self.session.expire();
            return Err(ApiError::SessionExpired);
        }
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                detail: extract_detail(&response.body),
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
