//! Dashboard Tables
//!
//! Row rendering for the four dashboard collections.

use leptos::prelude::*;
use leptos_table::{or_missing, yes_no, DataTable, TableRow};

use crate::models::{DocumentEntry, KpiEntry, LogEntry, MaterialEntry};

pub const LOG_HEADERS: &[&str] = &["ID", "Date", "Workers"];
pub const MATERIAL_HEADERS: &[&str] = &["ID", "DDT Number", "Batch", "Non-Conformity"];
pub const KPI_HEADERS: &[&str] = &["KPI", "Progress %", "Target Date"];
pub const DOCUMENT_HEADERS: &[&str] = &["ID", "File Type", "Notes", "Linked Log ID"];

/// Progress values are shown with at most two decimals, trailing zeros dropped
pub fn format_percent(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}%")
}

impl TableRow for LogEntry {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.format("%Y-%m-%d %H:%M").to_string(),
            self.workers_count.to_string(),
        ]
    }
}

impl TableRow for MaterialEntry {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.ddt_number.clone(),
            self.batch_number.clone(),
            yes_no(self.has_non_conformity()),
        ]
    }
}

impl TableRow for KpiEntry {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.kpi_name.clone(),
            format_percent(self.progress_percent),
            or_missing(self.target_date.map(|d| d.format("%Y-%m-%d"))),
        ]
    }
}

impl TableRow for DocumentEntry {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.file_type.clone(),
            or_missing(self.notes.as_deref().filter(|n| !n.is_empty())),
            or_missing(self.log_id),
        ]
    }
}

#[component]
pub fn LogsTable(logs: Signal<Vec<LogEntry>>) -> impl IntoView {
    view! { <DataTable headers=LOG_HEADERS rows=logs empty_text="No daily logs" /> }
}

#[component]
pub fn DocumentsTable(documents: Signal<Vec<DocumentEntry>>) -> impl IntoView {
    view! { <DataTable headers=DOCUMENT_HEADERS rows=documents empty_text="No documents" /> }
}
