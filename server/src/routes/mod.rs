//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own: the Remote API lives elsewhere and the
//! browser talks to it directly. This router serves the health probe, the
//! compiled WASM/CSS bundle under `/pkg`, and Leptos SSR for every other
//! path so deep links and unknown paths reach the client-side guards.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Probe routes that never touch the Leptos app.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR front end plus health and static bundle routes.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(agrimon_client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || agrimon_client::app::shell(opts.clone())
        })
        .fallback(file_and_error_handler(agrimon_client::app::shell))
        .with_state(leptos_options);

    health_routes()
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
