//! PV Site Manager App
//!
//! Root component: wires session and API client, then hands URL matching
//! to `leptos_router`. Each page passes the guard before it renders.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::path;

use crate::api::{ApiClient, FetchTransport};
use crate::components::{DashboardPage, LoginPage, NotFound};
use crate::config::AppConfig;
use crate::context::{use_app_context, AppContext};
use crate::router::{self, redirect_options, Page, Resolution, RouterNavigator};
use crate::session::{BrowserStorage, Session};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = Session::new(BrowserStorage, config.token_key.clone());
    session.subscribe(|event| tracing::info!(?event, "session event"));

    let client = ApiClient::new(config.api_base.clone(), session, FetchTransport);
    tracing::info!(api_base = %config.api_base, "app started");

    view! {
        <Router>
            <AppRoutes client=client />
        </Router>
    }
}

/// Route table; lives inside `<Router>` so navigation hooks are available
#[component]
fn AppRoutes(client: ApiClient) -> impl IntoView {
    let navigator = RouterNavigator::new(use_navigate());
    router::watch_session_expiry(client.session(), Arc::new(navigator));
    provide_context(AppContext::new(client, navigator));

    view! {
        <main class="app-layout">
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Guarded page=Page::Root /> } />
                <Route path=path!("/login") view=|| view! { <Guarded page=Page::Login /> } />
                <Route path=path!("/dashboard") view=|| view! { <Guarded page=Page::Dashboard /> } />
            </Routes>
        </main>
    }
}

/// Evaluates the guard once on entry, then renders the page or redirects
#[component]
fn Guarded(page: Page) -> impl IntoView {
    let ctx = use_app_context();

    match router::evaluate(page, &ctx.session) {
        Resolution::Render(Page::Login) => view! { <LoginPage /> }.into_any(),
        Resolution::Render(Page::Dashboard) => view! { <DashboardPage /> }.into_any(),
        // Root always forwards
        Resolution::Render(Page::Root) => view! { <NotFound /> }.into_any(),
        Resolution::Redirect(target) => {
            view! { <Redirect path=target.path() options=redirect_options() /> }.into_any()
        }
    }
}
