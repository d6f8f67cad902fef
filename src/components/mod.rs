//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and route guards while reading/writing
//! shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod guards;
pub mod pagination;
pub mod post_card;
pub mod post_editor;
pub mod sidebar;
