//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data fetching and polling, and delegates
//! derivations to `state` and shared rendering to `components`.

pub mod admin_dashboard;
pub mod alerts;
pub mod farmer_dashboard;
pub mod login;
pub mod ml_metrics;
pub(crate) mod overview_feed;
pub mod plot_detail;
pub mod unauthorized;
