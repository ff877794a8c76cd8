//! Daily Log Endpoints

use super::{ApiClient, ApiResult};
use crate::models::LogEntry;

pub async fn list_logs(client: &ApiClient) -> ApiResult<Vec<LogEntry>> {
    client.get("/logs/").await
}
