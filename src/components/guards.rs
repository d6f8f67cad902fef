//! Route guard wrappers.
//!
//! Both guards subscribe to `AuthState` so a login or logout anywhere in the
//! app re-runs them, and both re-read the persisted session rather than
//! trusting the snapshot.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::{AuthContext, AuthState};
use crate::util::auth::{GuardDecision, auth_route_decision, protected_route_decision};

/// Render `children` only for signed-out users; others go to the dashboard.
#[component]
pub fn AuthRoute(children: ChildrenFn) -> impl IntoView {
    guarded(children, auth_route_decision)
}

/// Render `children` only for signed-in users; others go to login.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(children, protected_route_decision)
}

fn guarded(children: ChildrenFn, decide: fn(&crate::state::session::Session) -> GuardDecision) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let auth_state = expect_context::<RwSignal<AuthState>>();

    move || {
        auth_state.track();
        match decide(&auth.session()) {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        }
    }
}
