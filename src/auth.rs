//! Auth Flow
//!
//! `Idle -> Submitting -> {Authenticated, Failed}`; a failed attempt may be
//! resubmitted.

use crate::api::{self, ApiClient, ApiError};
use crate::router::{Navigator, Page};

pub const LOGIN_FAILED: &str = "Login failed";
pub const FIELDS_REQUIRED: &str = "Username and password are required";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Idle,
    Submitting,
    Authenticated,
    Failed(String),
}

impl AuthState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, AuthState::Submitting)
    }

    /// Inline error message, if the last attempt failed
    pub fn error(&self) -> Option<&str> {
        match self {
            AuthState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// State after the form is submitted, or `None` if the submission is ignored
    pub fn begin(&self, username: &str, password: &str) -> Option<AuthState> {
        if self.is_submitting() {
            return None;
        }
        if username.is_empty() || password.is_empty() {
            return Some(AuthState::Failed(FIELDS_REQUIRED.to_string()));
        }
        Some(AuthState::Submitting)
    }
}

/// Message shown for a rejected login: server detail, else the fallback
pub fn failure_message(error: &ApiError) -> String {
    error.detail().unwrap_or(LOGIN_FAILED).to_string()
}

/// Exchange credentials, store the token and move on to the dashboard
///
/// Returns the terminal state of the attempt. Nothing is stored on failure.
pub async fn submit(client: &ApiClient, navigator: &dyn Navigator, username: &str, password: &str) -> AuthState {
    let token = match api::login(client, username, password).await {
        Ok(token) => token,
        Err(e) => {
            tracing::info!(error = %e, "login rejected");
            return AuthState::Failed(failure_message(&e));
        }
    };

    if !client.session().set(token.access_token) {
        return AuthState::Failed(LOGIN_FAILED.to_string());
    }
    navigator.navigate(Page::Dashboard);
    AuthState::Authenticated
}
