//! # postboard
//!
//! Leptos + WASM frontend for a small post-sharing service. Users sign in,
//! then create, edit, delete, and page through image-bearing text posts.
//!
//! This crate contains pages, components, session and dashboard state, the
//! REST client, and the wire types it speaks. Browser-only glue (storage,
//! HTTP, file inputs) is gated behind the `csr` feature so the state and
//! validation logic stays testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("postboard client starting");
    leptos::mount::mount_to_body(app::App);
}
