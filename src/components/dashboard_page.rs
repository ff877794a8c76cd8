//! Dashboard Page Component
//!
//! Loads the four collections once per mount and shows them in tabs.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use rolling_logger::LogLine;

use crate::components::{DocumentsTable, LogsTable, MaterialsPanel, ProgressPanel};
use crate::context::use_app_context;
use crate::dashboard::load_dashboard;
use crate::store::{store_apply_load, DashboardState, DashboardStateStoreFields, DashboardStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Logs,
    Materials,
    Progress,
    Documents,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Logs,
        DashboardTab::Materials,
        DashboardTab::Progress,
        DashboardTab::Documents,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Logs => "Daily Logs",
            DashboardTab::Materials => "Materials",
            DashboardTab::Progress => "Progress",
            DashboardTab::Documents => "Documents",
        }
    }
}

/// Captured log lines, newest last, for the failure banner
fn recent_log(lines: &[LogLine]) -> String {
    lines.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store: DashboardStore = Store::new(DashboardState::pending());

    let (tab, set_tab) = signal(DashboardTab::Logs);

    // One load per mount; the store starts out pending
    let client = ctx.client.clone();
    spawn_local(async move {
        let result = load_dashboard(&client).await;
        store_apply_load(&store, result);
    });

    let logs = Signal::derive(move || store.logs().get());
    let materials = Signal::derive(move || store.materials().get());
    let progress = Signal::derive(move || store.progress().get());
    let documents = Signal::derive(move || store.documents().get());

    let on_logout = move |_| ctx.logout();

    view! {
        <div class="dashboard">
            <header class="app-bar">
                <h1>"PV Site Manager Dashboard"</h1>
                <button class="logout-btn" on:click=on_logout>"Logout"</button>
            </header>

            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <div class="loading-bar"></div> }
            >
                <main class="dashboard-content">
                    {move || store.error().get().map(|message| view! {
                        <div class="alert alert-error">
                            <p>{message}</p>
                            <details class="recent-log">
                                <summary>"Recent log"</summary>
                                <pre>{recent_log(&rolling_logger::recent_lines())}</pre>
                            </details>
                        </div>
                    })}

                    <nav class="tab-bar">
                        {DashboardTab::ALL.into_iter().map(|t| {
                            let tab_class = move || if tab.get() == t { "tab active" } else { "tab" };
                            view! {
                                <button class=tab_class on:click=move |_| set_tab.set(t)>
                                    {t.label()}
                                </button>
                            }
                        }).collect_view()}
                    </nav>

                    <section class="tab-panel">
                        <h2>{move || tab.get().label()}</h2>
                        {move || match tab.get() {
                            DashboardTab::Logs => view! { <LogsTable logs=logs /> }.into_any(),
                            DashboardTab::Materials => view! { <MaterialsPanel materials=materials /> }.into_any(),
                            DashboardTab::Progress => view! { <ProgressPanel progress=progress /> }.into_any(),
                            DashboardTab::Documents => view! { <DocumentsTable documents=documents /> }.into_any(),
                        }}
                    </section>
                </main>
            </Show>
        </div>
    }
}
