//! Frontend Models
//!
//! Data structures matching the site manager API payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Daily site log (matches `GET /logs/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    pub date: NaiveDateTime,
    /// Unbounded on the server side, negatives included
    pub workers_count: i64,
}

/// Delivered material (matches `GET /materials/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub id: u32,
    pub ddt_number: String,
    pub batch_number: String,
    /// Nullable column; absent means no non-conformity was recorded
    #[serde(default)]
    pub non_conformity: Option<bool>,
}

impl MaterialEntry {
    pub fn has_non_conformity(&self) -> bool {
        self.non_conformity.unwrap_or(false)
    }
}

/// Full material record (matches `GET /materials/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDetail {
    pub id: u32,
    pub ddt_number: String,
    pub batch_number: String,
    #[serde(default)]
    pub non_conformity: Option<bool>,
    #[serde(default)]
    pub packing_list: Option<String>,
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiEntry {
    pub id: u32,
    pub kpi_name: String,
    pub progress_percent: f64,
    #[serde(default)]
    pub target_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub actual_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub overall_progress_percent: f64,
    #[serde(default)]
    pub overdue_milestones: u32,
}

/// KPI list plus the aggregated summary (matches `GET /progress/`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub kpis: Vec<KpiEntry>,
    pub dashboard_summary: DashboardSummary,
}

/// Uploaded document metadata (matches `GET /documents/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub id: u32,
    pub file_type: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub log_id: Option<u32>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub material_id: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_log_with_fractional_seconds() {
        let log: LogEntry = serde_json::from_str(
            r#"{"id": 1, "date": "2024-05-01T10:00:00.123456", "workers_count": 25}"#,
        )
        .unwrap();
        assert_eq!(log.workers_count, 25);
        assert_eq!(log.date.format("%Y-%m-%d").to_string(), "2024-05-01");
    }

    #[test]
    fn test_decode_negative_workers_count() {
        let log: LogEntry =
            serde_json::from_str(r#"{"id": 2, "date": "2024-05-02T08:00:00", "workers_count": -1}"#).unwrap();
        assert_eq!(log.workers_count, -1);
    }

    #[test]
    fn test_decode_null_non_conformity() {
        let material: MaterialEntry = serde_json::from_str(
            r#"{"id": 1, "ddt_number": "DDT-1", "batch_number": "B-1", "non_conformity": null}"#,
        )
        .unwrap();
        assert_eq!(material.non_conformity, None);
        assert!(!material.has_non_conformity());
    }

    #[test]
    fn test_decode_progress_ignores_extra_fields() {
        let json = r#"{
            "kpis": [
                {"id": 1, "kpi_name": "Piling", "progress_percent": 40.0, "target_date": "2024-06-30T00:00:00", "actual_date": null},
                {"id": 2, "kpi_name": "Cabling", "progress_percent": 10.5, "target_date": null}
            ],
            "dashboard_summary": {"overall_progress_percent": 25.25, "overdue_milestones": 1, "milestones": []}
        }"#;
        let progress: ProgressSummary = serde_json::from_str(json).unwrap();
        assert_eq!(progress.kpis.len(), 2);
        assert!(progress.kpis[0].target_date.is_some());
        assert!(progress.kpis[1].target_date.is_none());
        assert_eq!(progress.dashboard_summary.overall_progress_percent, 25.25);
        assert_eq!(progress.dashboard_summary.overdue_milestones, 1);
    }

    #[test]
    fn test_decode_empty_progress_summary() {
        let progress: ProgressSummary =
            serde_json::from_str(r#"{"kpis": [], "dashboard_summary": {"overall_progress_percent": 0}}"#).unwrap();
        assert_eq!(progress, ProgressSummary::default());
    }

    #[test]
    fn test_decode_document_optional_links() {
        let doc: DocumentEntry = serde_json::from_str(
            r#"{"id": 3, "file_path": "uploads/a.pdf", "file_type": "pdf", "notes": null, "log_id": 1, "material_id": null}"#,
        )
        .unwrap();
        assert_eq!(doc.log_id, Some(1));
        assert_eq!(doc.notes, None);
        assert_eq!(doc.material_id, None);
    }

    #[test]
    fn test_token_response_without_type() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token": "tok123"}"#).unwrap();
        assert_eq!(token.access_token, "tok123");
        assert!(token.token_type.is_none());
    }
}
