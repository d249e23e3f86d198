//! # agrimon-client
//!
//! Leptos + WASM front end for the agriculture monitoring dashboard.
//!
//! The `session` module is the authorization core: it reads stored tokens,
//! decodes the role claim and decides whether a route renders or redirects.
//! Pages, components and state build the admin and farmer views on top of
//! the Remote API client in `net`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
