//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::router::{self, RouterNavigator};
use crate::session::Session;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Credential slot
    pub session: Session,
    /// API client bound to `session`
    pub client: ApiClient,
    pub navigator: RouterNavigator,
}

impl AppContext {
    pub fn new(client: ApiClient, navigator: RouterNavigator) -> Self {
        Self {
            session: client.session().clone(),
            client,
            navigator,
        }
    }

    /// Clear the credential and leave for the login page
    pub fn logout(&self) {
        router::logout(&self.session, &self.navigator);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
