//! Client state modules.
//!
//! DESIGN
//! ======
//! `session` owns persistence, `auth` wraps it for pages and guards,
//! `flows` drives the login and signup forms, and `posts` holds the
//! dashboard's list/editor state machine. None of them
//! perform I/O themselves; pages execute requests and feed results back.

pub mod auth;
pub mod flows;
pub mod posts;
pub mod session;
