//! Severity badge shared by alert lists and plot tables.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

/// CSS class for a severity or status string.
#[must_use]
pub fn status_class(status: Option<&str>) -> &'static str {
    match status.map(str::to_ascii_lowercase).as_deref() {
        Some("critical" | "high") => "status-critical",
        Some("warning" | "medium") => "status-warning",
        Some("normal" | "low" | "healthy") => "status-normal",
        _ => "status-unknown",
    }
}

#[must_use]
pub fn status_label(status: Option<&str>) -> String {
    status.filter(|s| !s.is_empty()).unwrap_or("Unknown").to_owned()
}

#[component]
pub fn StatusBadge(#[prop(optional_no_strip)] status: Option<String>) -> impl IntoView {
    let class = format!("status-badge {}", status_class(status.as_deref()));
    view! { <span class=class>{status_label(status.as_deref())}</span> }
}
