//! View Router and Guard
//!
//! URL matching is done by `leptos_router`; this module holds the guard
//! rules and the navigation seam. Routes are resolved against the session
//! once, when a page is entered. Navigation goes through [`Navigator`] so
//! guards, logout and the session-expiry observer can be exercised without
//! a browser.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::session::{Session, SessionEvent};

/// Guarded pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Root,
    Login,
    Dashboard,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Root => "/",
            Page::Login => "/login",
            Page::Dashboard => "/dashboard",
        }
    }
}

/// Outcome of evaluating a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(Page),
}

/// Guard rules: root forwards by session state, dashboard requires a credential
pub fn resolve(page: Page, authenticated: bool) -> Resolution {
    match page {
        Page::Root if authenticated => Resolution::Redirect(Page::Dashboard),
        Page::Root => Resolution::Redirect(Page::Login),
        Page::Dashboard if !authenticated => Resolution::Redirect(Page::Login),
        other => Resolution::Render(other),
    }
}

/// Reads the credential once; later changes do not re-trigger the guard
pub fn evaluate(page: Page, session: &Session) -> Resolution {
    let resolution = resolve(page, session.is_authenticated());
    tracing::debug!(?page, ?resolution, "page evaluated");
    resolution
}

/// Options for guard redirects: the guarded URL is not kept in history
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

pub trait Navigator: Send + Sync {
    /// In-app navigation with a history entry
    fn navigate(&self, page: Page);
    /// Full page load
    fn redirect(&self, page: Page);
}

/// Synchronous logout: drop the credential, then leave for the login page
pub fn logout(session: &Session, navigator: &dyn Navigator) {
    session.clear();
    navigator.redirect(Page::Login);
}

/// Navigation observer for 401s raised anywhere in the API client
pub fn watch_session_expiry(session: &Session, navigator: Arc<dyn Navigator>) {
    session.subscribe(move |event| {
        if event == SessionEvent::Expired {
            tracing::info!("redirecting to login after session expiry");
            navigator.redirect(Page::Login);
        }
    });
}

// ========================
// Router Navigator
// ========================

type NavigateFn = Box<dyn Fn(&str, NavigateOptions)>;

/// Soft navigation through the router, hard redirects through `location`
///
/// Must be created inside `<Router>`.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigate: StoredValue<NavigateFn, LocalStorage>,
}

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self {
            navigate: StoredValue::new_local(Box::new(navigate) as NavigateFn),
        }
    }

    fn soft(&self, page: Page, options: NavigateOptions) {
        let sent = self
            .navigate
            .try_with_value(|navigate| navigate(page.path(), options));
        if sent.is_none() {
            tracing::warn!(?page, "router is gone, navigation dropped");
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, page: Page) {
        tracing::debug!(?page, "navigate");
        self.soft(page, NavigateOptions::default());
    }

    fn redirect(&self, page: Page) {
        tracing::debug!(?page, "redirect");
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(page.path()) {
                    tracing::warn!(error = ?e, "hard redirect failed, navigating in-app");
                    self.soft(page, redirect_options());
                }
            }
            None => self.soft(page, redirect_options()),
        }
    }
}
