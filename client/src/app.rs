//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except `/login` and `/unauthorized` is wrapped in a
//! `ProtectedRoute` carrying its allowed roles. `/` and every unmatched path
//! hit a wildcard route admitting any role, whose body sends the user to
//! their role home.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::net::api::{ApiClient, configured_base_url};
use crate::pages::{
    admin_dashboard::AdminDashboardPage, alerts::AlertsPage, farmer_dashboard::FarmerDashboardPage,
    login::LoginPage, ml_metrics::MlMetricsPage, plot_detail::PlotDetailPage, unauthorized::UnauthorizedPage,
};
use crate::session::{Role, TokenStore};
use crate::state::auth::AuthState;
use crate::util::auth::{ProtectedRoute, RoleHomeRedirect};

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const ADMIN_HOME_PATH: &str = "/admin";
pub const ADMIN_ALERTS_PATH: &str = "/admin/alerts";
pub const ADMIN_PLOTS_PATH: &str = "/admin/plots";
pub const ADMIN_ML_METRICS_PATH: &str = "/admin/ml-metrics";
pub const FARMER_HOME_PATH: &str = "/dashboard";

/// Every recognized role. Used by the catch-all route.
pub const ANY_ROLE: &[Role] = &[Role::Admin, Role::Farmer, Role::Worker];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const FARMER_OR_WORKER: &[Role] = &[Role::Farmer, Role::Worker];

/// Link target for one plot's detail view.
#[must_use]
pub fn plot_path(plot: &str) -> String {
    format!("{ADMIN_PLOTS_PATH}/{plot}")
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = TokenStore::browser();
    provide_context(ApiClient::new(configured_base_url(), store.clone()));
    provide_context(AuthState::new(store));

    view! {
        <Stylesheet id="leptos" href="/pkg/agrimon.css"/>
        <Title text="AgriMon"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route
                    path=StaticSegment("admin")
                    view=|| view! {
                        <ProtectedRoute roles=ADMIN_ONLY>
                            <AdminLayout><AdminDashboardPage/></AdminLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("alerts"))
                    view=|| view! {
                        <ProtectedRoute roles=ADMIN_ONLY>
                            <AdminLayout><AlertsPage/></AdminLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("plots"), ParamSegment("plot_id"))
                    view=|| view! {
                        <ProtectedRoute roles=ADMIN_ONLY>
                            <AdminLayout><PlotDetailPage/></AdminLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("ml-metrics"))
                    view=|| view! {
                        <ProtectedRoute roles=ADMIN_ONLY>
                            <AdminLayout><MlMetricsPage/></AdminLayout>
                        </ProtectedRoute>
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! {
                        <ProtectedRoute roles=FARMER_OR_WORKER>
                            <FarmerDashboardPage/>
                        </ProtectedRoute>
                    }
                />
                <Route path=StaticSegment("") view=RoleHomeRoute/>
                <Route path=WildcardSegment("any") view=RoleHomeRoute/>
            </Routes>
        </Router>
    }
}

/// `/` and unmatched paths: any signed-in role, redirected to its home.
#[component]
fn RoleHomeRoute() -> impl IntoView {
    view! {
        <ProtectedRoute roles=ANY_ROLE>
            <RoleHomeRedirect/>
        </ProtectedRoute>
    }
}
