//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `error` defines how failures surface to pages,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
