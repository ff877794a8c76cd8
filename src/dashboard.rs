//! Dashboard Data Loader
//!
//! Fetches the four dashboard collections concurrently and joins them into a
//! single all-or-nothing result. The join is fail-fast: the first failure
//! drops the sibling requests and their results are never consumed.

use futures_util::future::try_join4;

use crate::api::{self, ApiClient, ApiError};
use crate::models::{DocumentEntry, LogEntry, MaterialEntry, ProgressSummary};

/// Banner shown when the dashboard cannot be loaded
pub const LOAD_FAILED: &str = "Failed to fetch data";

/// One complete page load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub logs: Vec<LogEntry>,
    pub materials: Vec<MaterialEntry>,
    pub progress: ProgressSummary,
    pub documents: Vec<DocumentEntry>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    /// A request hit 401; the session observer handles the redirect
    #[error("session expired while loading dashboard")]
    SessionExpired,
    #[error("failed to load dashboard: {0}")]
    Failed(#[source] ApiError),
}

impl From<ApiError> for LoadError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::SessionExpired => LoadError::SessionExpired,
            other => LoadError::Failed(other),
        }
    }
}

impl LoadError {
    /// Banner text; session expiry is signalled by the redirect instead
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            LoadError::SessionExpired => None,
            LoadError::Failed(_) => Some(LOAD_FAILED),
        }
    }
}

pub async fn load_dashboard(client: &ApiClient) -> Result<DashboardData, LoadError> {
    let joined = try_join4(
        api::list_logs(client),
        api::list_materials(client),
        api::get_progress(client),
        api::list_documents(client),
    )
    .await;

    match joined {
        Ok((logs, materials, progress, documents)) => {
            tracing::info!(
                logs = logs.len(),
                materials = materials.len(),
                kpis = progress.kpis.len(),
                documents = documents.len(),
                "dashboard loaded"
            );
            Ok(DashboardData { logs, materials, progress, documents })
        }
        Err(e) => {
            let error = LoadError::from(e);
            if error.banner().is_some() {
                tracing::error!(error = %error, "dashboard load failed");
            }
            Err(error)
        }
    }
}
