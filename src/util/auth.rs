//! Shared auth helpers for route guards and session transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior, and every login/logout
//! must also refresh the reactive `AuthState` so guards re-evaluate.
//! Presence of a token is the only check; expiry and signatures are the
//! server's concern.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::{AuthContext, AuthState};
use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Guard for login/signup: signed-in users go to the dashboard.
pub fn auth_route_decision(session: &Session) -> GuardDecision {
    if session.has_token() { GuardDecision::Redirect(DASHBOARD_PATH) } else { GuardDecision::Render }
}

/// Guard for protected pages: signed-out users go to login.
pub fn protected_route_decision(session: &Session) -> GuardDecision {
    if session.has_token() { GuardDecision::Render } else { GuardDecision::Redirect(LOGIN_PATH) }
}

/// Store a new session and publish it to subscribers.
pub fn sign_in(auth: &AuthContext, state: RwSignal<AuthState>, token: &str, user: &User) {
    auth.login(token, user);
    state.set(auth.state());
}

/// Clear the session and publish it to subscribers.
pub fn sign_out(auth: &AuthContext, state: RwSignal<AuthState>) {
    auth.logout();
    state.set(auth.state());
}
