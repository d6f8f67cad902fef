//! Request lifetime helpers: cancellation on teardown and response ordering.
//!
//! SYSTEM CONTEXT
//! ==============
//! HTTP calls are suspension points on the UI thread. A response can land
//! after its page unmounted, or after a newer request for the same list was
//! issued. Pages hold a `CancelHandle` released from `on_cleanup`, and list
//! state stamps each request with a `RequestSeq` number.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared liveness flag for requests owned by one view.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    live: Arc<AtomicBool>,
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelHandle {
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }

    /// Whether responses should still be applied.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }

    /// Mark every clone dead; later responses are dropped.
    pub fn cancel(&self) {
        self.live.store(false, Ordering::Relaxed);
    }
}

/// Monotonic request numbering with last-request-wins acceptance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
    applied: u64,
}

impl RequestSeq {
    /// Number the next outgoing request.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Admit a response unless a newer one was already applied.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq <= self.applied || seq > self.issued {
            return false;
        }
        self.applied = seq;
        true
    }

    /// Whether `seq` is the most recently issued request.
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }
}
