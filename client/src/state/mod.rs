//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page domain (`auth`, `alerts`, `plot`, etc.) so pages
//! depend on small focused models. The derivations here are plain functions
//! over wire records, which keeps them testable without a browser.

pub mod alerts;
pub mod auth;
pub mod metrics;
pub mod overview;
pub mod plot;
