//! Material Endpoints

use super::{ApiClient, ApiResult};
use crate::models::{MaterialDetail, MaterialEntry};

pub async fn list_materials(client: &ApiClient) -> ApiResult<Vec<MaterialEntry>> {
    client.get("/materials/").await
}

pub async fn get_material(client: &ApiClient, id: u32) -> ApiResult<MaterialDetail> {
    client.get(&format!("/materials/{id}")).await
}
