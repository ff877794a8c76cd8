//! PV Site Manager Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod dashboard;
mod models;
mod router;
mod session;
mod store;

#[cfg(test)]
mod testing;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = rolling_logger::init_logger("PvSiteManager", config.log_level()) {
        leptos::logging::warn!("logger disabled: {e}");
    }

    mount_to_body(move || view! { <App config=config /> });
}
