//! Login page: email + password against `POST /auth/login`.
//!
//! Validation fails fast with a field-specific message before any request is
//! made. The loading flag disables the submit button and a submit while a
//! request is outstanding is ignored.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::{AuthContext, AuthState};
use crate::state::flows::LoginFlow;
use crate::util::request::CancelHandle;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<AuthContext>();
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let flow = RwSignal::new(LoginFlow::default());
    let loading = move || flow.with(|f| f.loading);
    let error = move || flow.with(|f| f.error.clone());

    let alive = CancelHandle::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) =
            flow.try_update(|f| f.begin(&email.get_untracked(), &password.get_untracked())).flatten()
        else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let api = crate::net::api::ApiClient::from_session(&config, &auth.session());
            let auth = auth.clone();
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = api.login(&credentials).await;
                if !alive.is_live() {
                    return;
                }
                let outcome = flow
                    .try_update(|f| match result {
                        Ok(resp) => f.succeed(resp),
                        Err(e) => {
                            f.fail(&e);
                            None
                        }
                    })
                    .flatten();
                if let Some(outcome) = outcome {
                    let next = crate::state::flows::complete(&auth, auth_state, &outcome);
                    navigate(next, leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, &config, &auth, auth_state, &navigate, &alive);
            flow.update(|f| f.fail(&crate::net::error::ApiError::Unavailable));
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Postboard"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=loading>
                        {move || if loading() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error().is_some()>
                    <p class="login-message login-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
