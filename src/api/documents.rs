//! Document Endpoints

use super::{ApiClient, ApiResult};
use crate::models::DocumentEntry;

pub async fn list_documents(client: &ApiClient) -> ApiResult<Vec<DocumentEntry>> {
    client.get("/documents/").await
}
