//! Materials Panel Component
//!
//! Materials table with a detail view for the selected delivery.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_table::{or_missing, DataTable};

use crate::api;
use crate::components::tables::MATERIAL_HEADERS;
use crate::context::use_app_context;
use crate::models::{MaterialDetail, MaterialEntry};

/// Detail panel state
#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Closed,
    Loading(u32),
    Loaded(MaterialDetail),
    Failed,
}

/// Outcome of the request for `id`, or `None` once another row has been selected
fn settle(current: &DetailState, id: u32, outcome: DetailState) -> Option<DetailState> {
    match current {
        DetailState::Loading(pending) if *pending == id => Some(outcome),
        _ => None,
    }
}

#[component]
pub fn MaterialsPanel(materials: Signal<Vec<MaterialEntry>>) -> impl IntoView {
    let ctx = use_app_context();
    let (detail, set_detail) = signal(DetailState::Closed);

    let on_select = Callback::new(move |material: MaterialEntry| {
        let client = ctx.client.clone();
        let id = material.id;
        set_detail.set(DetailState::Loading(id));
        spawn_local(async move {
            let outcome = match api::get_material(&client, id).await {
                Ok(loaded) => DetailState::Loaded(loaded),
                Err(e) if e.is_session_expired() => DetailState::Closed,
                Err(e) => {
                    tracing::error!(id, error = %e, "failed to load material");
                    DetailState::Failed
                }
            };
            match detail.with_untracked(|current| settle(current, id, outcome)) {
                Some(next) => set_detail.set(next),
                None => tracing::debug!(id, "dropping stale material response"),
            }
        });
    });

    view! {
        <div class="materials-panel">
            <DataTable
                headers=MATERIAL_HEADERS
                rows=materials
                empty_text="No materials"
                on_select=on_select
            />
            {move || match detail.get() {
                DetailState::Closed => ().into_any(),
                DetailState::Loading(id) => view! {
                    <div class="material-detail loading">{format!("Loading material #{}...", id)}</div>
                }.into_any(),
                DetailState::Failed => view! {
                    <div class="alert alert-error">"Failed to load material"</div>
                }.into_any(),
                DetailState::Loaded(m) => view! {
                    <div class="material-detail card">
                        <div class="card-header">
                            <h3>{format!("DDT {}", m.ddt_number)}</h3>
                            <button class="close-btn" on:click=move |_| set_detail.set(DetailState::Closed)>"×"</button>
                        </div>
                        <dl>
                            <dt>"Batch"</dt><dd>{m.batch_number.clone()}</dd>
                            <dt>"Container"</dt><dd>{or_missing(m.container_id.clone())}</dd>
                            <dt>"Packing List"</dt><dd>{or_missing(m.packing_list.clone())}</dd>
                            <dt>"Notes"</dt><dd>{or_missing(m.notes.clone())}</dd>
                        </dl>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
