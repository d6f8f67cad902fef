//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is the injectable handle over the session store; it is what
//! pages call `login`/`logout` on. `AuthState` is the reactive snapshot that
//! guards and user-aware components subscribe to so they re-render after the
//! session changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use super::session::{Session, SessionStore};
use crate::net::types::User;

/// Snapshot of the session for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    pub fn from_session(session: &Session) -> Self {
        Self { user: session.user.clone() }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

/// Process-wide authentication handle backed by a [`SessionStore`].
#[derive(Clone)]
pub struct AuthContext {
    store: Arc<dyn SessionStore>,
}

impl AuthContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Current persisted session, re-read on every call.
    pub fn session(&self) -> Session {
        self.store.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().has_token()
    }

    pub fn token(&self) -> Option<String> {
        self.session().token
    }

    pub fn current_user_id(&self) -> Option<String> {
        self.session().user.map(|u| u.id)
    }

    pub fn state(&self) -> AuthState {
        AuthState::from_session(&self.session())
    }

    /// Persist `{token, user}` and mark the session authenticated.
    pub fn login(&self, token: &str, user: &User) {
        self.store.login(token, user);
        log::info!("session started for user {}", user.id);
    }

    /// Clear the persisted session.
    pub fn logout(&self) {
        let user_id = self.current_user_id();
        self.store.logout();
        log::info!("session ended for user {}", user_id.as_deref().unwrap_or("<none>"));
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
