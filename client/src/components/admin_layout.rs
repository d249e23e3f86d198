//! Admin shell: sidebar navigation around the routed admin page.
//!
//! DESIGN
//! ======
//! Plot detail pages have no sidebar entry of their own; they highlight
//! Dashboard, which links to them.

#[cfg(test)]
#[path = "admin_layout_test.rs"]
mod admin_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::session_controls::SessionControls;
use crate::app::{ADMIN_ALERTS_PATH, ADMIN_HOME_PATH, ADMIN_ML_METRICS_PATH, ADMIN_PLOTS_PATH};

/// Sidebar entries as `(label, path)`.
pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("Dashboard", ADMIN_HOME_PATH),
    ("Alerts", ADMIN_ALERTS_PATH),
    ("ML Metrics", ADMIN_ML_METRICS_PATH),
];

/// Whether the sidebar entry for `item` is highlighted at `current`.
#[must_use]
pub fn is_active(current: &str, item: &str) -> bool {
    let current = current.trim_end_matches('/');
    if item == ADMIN_HOME_PATH {
        return current == ADMIN_HOME_PATH || current.starts_with(&format!("{ADMIN_PLOTS_PATH}/"));
    }
    current == item || current.starts_with(&format!("{item}/"))
}

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let location = use_location();

    view! {
        <div class="admin-layout">
            <aside class="admin-layout__sidebar">
                <h2 class="admin-layout__brand">"AgriMon"</h2>
                <nav class="admin-layout__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(label, path)| {
                            let pathname = location.pathname;
                            view! {
                                <a
                                    class="admin-layout__link"
                                    class:admin-layout__link--active=move || is_active(&pathname.get(), path)
                                    href=path
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
            <div class="admin-layout__main">
                <header class="admin-layout__header toolbar">
                    <span class="toolbar__title">"Admin Console"</span>
                    <span class="toolbar__spacer"></span>
                    <SessionControls/>
                </header>
                <main class="admin-layout__content">{children()}</main>
            </div>
        </div>
    }
}
