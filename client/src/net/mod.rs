//! Networking for the Remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues authenticated REST calls and `types` defines the wire schema
//! of the records it returns.

pub mod api;
pub mod types;
