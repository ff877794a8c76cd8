//! UI Components
//!
//! Leptos views for the login and dashboard pages.

mod dashboard_page;
mod login_page;
mod materials_panel;
mod not_found;
mod progress_panel;
mod tables;

pub use dashboard_page::DashboardPage;
pub use login_page::LoginPage;
pub use materials_panel::MaterialsPanel;
pub use not_found::NotFound;
pub use progress_panel::ProgressPanel;
pub use tables::{DocumentsTable, LogsTable};
