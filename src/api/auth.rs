//! Auth Endpoints

use super::{ApiClient, ApiResult};
use crate::models::{LoginRequest, TokenResponse};

/// Exchange username/password for a bearer token
///
/// A 401 here is a rejected login, not an expired session.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> ApiResult<TokenResponse> {
    client
        .post_public("/auth/login", &LoginRequest { username, password })
        .await
}
