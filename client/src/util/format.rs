//! Display formatting for readings, timestamps and scores.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

use crate::net::types::SensorKind;

/// Placeholder for a missing value.
pub const MISSING: &str = "N/A";

/// `23.5 °C`, or `N/A` when the metric has no value.
#[must_use]
pub fn metric_value(value: Option<f64>, kind: SensorKind) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| format!("{v:.1} {}", kind.unit()))
}

#[must_use]
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Model confidence as a whole percentage, e.g. `87%`.
#[must_use]
pub fn confidence(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| format!("{:.0}%", v * 100.0))
}

#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}
