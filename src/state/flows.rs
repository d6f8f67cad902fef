//! Login and signup form flows.
//!
//! Each flow owns the form's `loading` flag and inline error. `begin`
//! validates and marks the request as outstanding, returning `None` when
//! validation fails or a request is already in flight. The page issues the
//! request and reports back through `succeed` or `fail`.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use leptos::prelude::RwSignal;

use super::auth::{AuthContext, AuthState};
use crate::net::error::{ApiError, FALLBACK_MESSAGE};
use crate::net::types::{Credentials, LoginResponse, SignupForm, SignupPayload, SignupResponse, User};
use crate::util::auth::{DASHBOARD_PATH, LOGIN_PATH, sign_in};
use crate::util::validation::{validate_login, validate_signup};

/// Where a completed form sends the user.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowOutcome {
    /// The server issued a session; store it.
    SignedIn { token: String, user: User },
    /// Account created without a session; the user must log in next.
    Registered { message: Option<String> },
}

impl FlowOutcome {
    pub fn next_path(&self) -> &'static str {
        match self {
            Self::SignedIn { .. } => DASHBOARD_PATH,
            Self::Registered { .. } => LOGIN_PATH,
        }
    }
}

/// Store the session for a signed-in outcome and return the path to open.
pub fn complete(auth: &AuthContext, auth_state: RwSignal<AuthState>, outcome: &FlowOutcome) -> &'static str {
    match outcome {
        FlowOutcome::SignedIn { token, user } => sign_in(auth, auth_state, token, user),
        FlowOutcome::Registered { message } => {
            log::info!("signup: {}", message.as_deref().unwrap_or("account created"));
        }
    }
    outcome.next_path()
}

fn session_of(token: Option<String>, user: Option<User>) -> Option<(String, User)> {
    match (token.filter(|t| !t.is_empty()), user) {
        (Some(token), Some(user)) => Some((token, user)),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFlow {
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginFlow {
    /// Validate `email` and `password`, failing fast on the first bad field.
    pub fn begin(&mut self, email: &str, password: &str) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
        if let Err(e) = validate_login(&credentials) {
            self.error = Some(e.message.to_owned());
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(credentials)
    }

    /// A 200 without both token and user is a failure carrying the server's
    /// message.
    pub fn succeed(&mut self, resp: LoginResponse) -> Option<FlowOutcome> {
        self.loading = false;
        if let Some(msg) = &resp.message {
            log::info!("login: {msg}");
        }
        match session_of(resp.token, resp.user) {
            Some((token, user)) => Some(FlowOutcome::SignedIn { token, user }),
            None => {
                self.error = Some(resp.message.unwrap_or_else(|| FALLBACK_MESSAGE.to_owned()));
                None
            }
        }
    }

    pub fn fail(&mut self, err: &ApiError) {
        log::warn!("login failed: {err}");
        self.loading = false;
        self.error = Some(err.user_message(FALLBACK_MESSAGE));
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupFlow {
    pub loading: bool,
    pub error: Option<String>,
}

impl SignupFlow {
    pub fn begin(&mut self, form: &SignupForm) -> Option<SignupPayload> {
        if self.loading {
            return None;
        }
        if let Err(e) = validate_signup(form) {
            self.error = Some(e.message.to_owned());
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(SignupPayload::from(form))
    }

    /// Signs in when the response carries a session; otherwise the account
    /// exists and the user logs in next.
    pub fn succeed(&mut self, resp: SignupResponse) -> FlowOutcome {
        self.loading = false;
        match session_of(resp.token, resp.user) {
            Some((token, user)) => FlowOutcome::SignedIn { token, user },
            None => FlowOutcome::Registered { message: resp.message },
        }
    }

    pub fn fail(&mut self, err: &ApiError) {
        log::warn!("signup failed: {err}");
        self.loading = false;
        self.error = Some(err.user_message(FALLBACK_MESSAGE));
    }
}
