//! Persisted session record and the stores that hold it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the one piece of state shared by every page: guards read it
//! on each navigation and the API client reads its token on each request.
//! Stores never cache; every `get()` re-parses the persisted record.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Storage key holding the serialized session.
pub const SESSION_KEY: &str = "user_data";

/// Client-held proof of authentication plus cached user identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "userToken", alias = "userTocken", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self { token: Some(token.into()), user: Some(user) }
    }

    /// Parse a persisted record. Absence or a parse failure is "no session".
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let mut session: Self = serde_json::from_str(raw).unwrap_or_default();
        if session.token.as_deref().is_some_and(str::is_empty) {
            session.token = None;
        }
        session
    }

    /// Serialize for storage.
    pub fn to_raw(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }

    /// Token presence alone decides authentication.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

/// Read/write access to the persisted session.
///
/// `login` and `logout` each replace the whole record in one write so a
/// reader never observes a token without its user or the reverse.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Session;
    fn login(&self, token: &str, user: &User);
    fn logout(&self);
}

/// Session store backed by browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self) -> Session {
        Session::parse(crate::util::storage::load_raw(SESSION_KEY).as_deref())
    }

    fn login(&self, token: &str, user: &User) {
        let raw = Session::new(token, user.clone()).to_raw();
        crate::util::storage::save_raw(SESSION_KEY, &raw);
    }

    fn logout(&self) {
        crate::util::storage::remove(SESSION_KEY);
    }
}

/// In-memory session store holding the same raw record the browser would.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    raw: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw record, e.g. a hand-edited or corrupt one.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Arc::new(Mutex::new(Some(raw.into()))) }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|r| r.clone())
    }

    fn replace(&self, next: Option<String>) {
        if let Ok(mut raw) = self.raw.lock() {
            *raw = next;
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Session {
        Session::parse(self.raw().as_deref())
    }

    fn login(&self, token: &str, user: &User) {
        self.replace(Some(Session::new(token, user.clone()).to_raw()));
    }

    fn logout(&self) {
        self.replace(None);
    }
}

/// Store used by the running app: `localStorage` in the browser, memory
/// elsewhere.
pub fn default_store() -> Arc<dyn SessionStore> {
    if cfg!(feature = "csr") {
        Arc::new(BrowserSessionStore)
    } else {
        Arc::new(MemorySessionStore::new())
    }
}
