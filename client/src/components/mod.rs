//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome and record cards, reading session
//! state from Leptos context where they need it.

pub mod admin_layout;
pub mod anomaly_card;
pub mod session_controls;
pub mod status_badge;
