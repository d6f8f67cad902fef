//! Dashboard sidebar with the signed-in user and a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthContext, AuthState};
use crate::util::auth::{LOGIN_PATH, sign_out};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let display_name = move || {
        auth_state.with(|a| {
            a.user
                .as_ref()
                .and_then(|u| u.username.clone().or_else(|| u.email.clone()))
                .unwrap_or_else(|| "me".to_owned())
        })
    };

    let on_logout = move |_| {
        sign_out(&auth, auth_state);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <nav class="sidebar__nav">
                <span class="sidebar__self">{display_name}</span>
                <button class="btn btn--danger sidebar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </nav>
        </aside>
    }
}
