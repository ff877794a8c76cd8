//! Progress Endpoints

use super::{ApiClient, ApiResult};
use crate::models::ProgressSummary;

/// KPIs plus the overall summary
pub async fn get_progress(client: &ApiClient) -> ApiResult<ProgressSummary> {
    client.get("/progress/").await
}
