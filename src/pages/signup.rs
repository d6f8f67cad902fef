//! Signup page: username, email, password, and confirmation against
//! `POST /auth/signup`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::types::SignupForm;
use crate::state::auth::{AuthContext, AuthState};
use crate::state::flows::SignupFlow;
use crate::util::request::CancelHandle;

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<AuthContext>();
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let flow = RwSignal::new(SignupFlow::default());
    let loading = move || flow.with(|f| f.loading);
    let error = move || flow.with(|f| f.error.clone());

    let alive = CancelHandle::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let Some(payload) = flow.try_update(|f| f.begin(&form)).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let api = crate::net::api::ApiClient::from_session(&config, &auth.session());
            let auth = auth.clone();
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = api.signup(&payload).await;
                if !alive.is_live() {
                    return;
                }
                let outcome = flow
                    .try_update(|f| match result {
                        Ok(resp) => Some(f.succeed(resp)),
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
            let _ = (payload, &config, &auth, auth_state, &navigate, &alive);
            flow.update(|f| f.fail(&crate::net::error::ApiError::Unavailable));
        }
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Postboard"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    {field("Username", "text", username)}
                    {field("you@example.com", "text", email)}
                    {field("Password", "password", password)}
                    {field("Confirm password", "password", confirm_password)}
                    <button class="login-button" type="submit" disabled=loading>
                        {move || if loading() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || error().is_some()>
                    <p class="login-message login-message--error">{move || error().unwrap_or_default()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
