//! Progress Panel Component
//!
//! Overall completion card plus the KPI table.

use leptos::prelude::*;
use leptos_table::DataTable;

use crate::components::tables::{format_percent, KPI_HEADERS};
use crate::models::{KpiEntry, ProgressSummary};

/// Width of the progress bar fill, clamped to 0..=100
fn bar_width(percent: f64) -> String {
    format!("width: {}%", percent.clamp(0.0, 100.0))
}

#[component]
pub fn ProgressPanel(progress: Signal<ProgressSummary>) -> impl IntoView {
    let overall = move || progress.with(|p| p.dashboard_summary.overall_progress_percent);
    let overdue = move || progress.with(|p| p.dashboard_summary.overdue_milestones);
    let kpis: Signal<Vec<KpiEntry>> = Signal::derive(move || progress.with(|p| p.kpis.clone()));

    view! {
        <div class="progress-panel">
            <div class="card">
                <h3>{move || format!("Overall Progress: {}", format_percent(overall()))}</h3>
                <div class="progress-bar">
                    <div class="progress-bar-fill" style=move || bar_width(overall())></div>
                </div>
                <Show when=move || { overdue() > 0 }>
                    <p class="overdue">{move || format!("{} overdue milestone(s)", overdue())}</p>
                </Show>
            </div>
            <DataTable headers=KPI_HEADERS rows=kpis empty_text="No KPIs" />
        </div>
    }
}
