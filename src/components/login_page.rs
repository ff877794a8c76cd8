//! Login Page Component
//!
//! Username/password form driving the auth flow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{self, AuthState};
use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (state, set_state) = signal(AuthState::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();

        let Some(next) = state.get_untracked().begin(&user, &pass) else {
            return;
        };
        let submitting = next.is_submitting();
        set_state.set(next);
        if !submitting {
            return;
        }

        let ctx = ctx.clone();
        spawn_local(async move {
            let outcome = auth::submit(&ctx.client, &ctx.navigator, &user, &pass).await;
            set_state.set(outcome);
        });
    };

    view! {
        <div class="login-container">
            <div class="card login-card">
                <h1>"PV Site Manager Login"</h1>
                <form on:submit=on_submit>
                    <label>
                        "Username"
                        <input
                            type="text"
                            required
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || state.get().error().map(|message| view! {
                        <div class="alert alert-error">{message.to_string()}</div>
                    })}
                    <button type="submit" class="primary" disabled=move || state.get().is_submitting()>
                        {move || if state.get().is_submitting() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
