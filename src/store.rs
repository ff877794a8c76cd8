//! Dashboard View Model Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::dashboard::{DashboardData, LoadError};
use crate::models::{DocumentEntry, LogEntry, MaterialEntry, ProgressSummary};

/// Dashboard page state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// A load is in flight
    pub loading: bool,
    /// Banner text for a failed load
    pub error: Option<String>,
    pub logs: Vec<LogEntry>,
    pub materials: Vec<MaterialEntry>,
    pub progress: ProgressSummary,
    pub documents: Vec<DocumentEntry>,
}

impl DashboardState {
    /// Fresh state for a page mount: empty tables, loading
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a finished load. Tables are only replaced on full success.
pub fn store_apply_load(store: &DashboardStore, result: Result<DashboardData, LoadError>) {
    match result {
        Ok(data) => {
            *store.logs().write() = data.logs;
            *store.materials().write() = data.materials;
            *store.progress().write() = data.progress;
            *store.documents().write() = data.documents;
            *store.error().write() = None;
        }
        Err(e) => {
            if let Some(banner) = e.banner() {
                *store.error().write() = Some(banner.to_string());
            }
        }
    }
    *store.loading().write() = false;
}
