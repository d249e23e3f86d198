//! Alerts list state: severity filtering, ordering, and summary counts.
//!
//! Severity strings from the backend are compared case-insensitively and
//! folded into three buckets: critical (`critical`, `high`), warning
//! (`warning`, `medium`), and low (`low`, `normal`).

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use crate::net::types::AnomalyRecord;

/// Severity bucket used by filters and stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeverityBucket {
    Critical,
    Warning,
    Low,
}

impl SeverityBucket {
    #[must_use]
    pub fn of(severity: Option<&str>) -> Option<Self> {
        match severity?.to_ascii_lowercase().as_str() {
            "critical" | "high" => Some(Self::Critical),
            "warning" | "medium" => Some(Self::Warning),
            "low" | "normal" => Some(Self::Low),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Low => "low",
        }
    }
}

/// Sort rank of a raw severity; unknown values sort last.
#[must_use]
pub fn severity_rank(severity: Option<&str>) -> u8 {
    match severity.map(str::to_ascii_lowercase).as_deref() {
        Some("critical") => 0,
        Some("high") => 1,
        Some("warning") => 2,
        Some("medium") => 3,
        Some("low") => 4,
        Some("normal") => 5,
        _ => 99,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeverityFilter {
    #[default]
    All,
    Critical,
    Warning,
    Low,
}

impl SeverityFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Critical, Self::Warning, Self::Low];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Low => "low",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Low => "Low",
        }
    }

    #[must_use]
    pub fn matches(self, anomaly: &AnomalyRecord) -> bool {
        let bucket = SeverityBucket::of(anomaly.severity.as_deref());
        match self {
            Self::All => true,
            Self::Critical => bucket == Some(SeverityBucket::Critical),
            Self::Warning => bucket == Some(SeverityBucket::Warning),
            Self::Low => bucket == Some(SeverityBucket::Low),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Severity,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Oldest, Self::Severity];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Severity => "severity",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Severity => "By Severity",
        }
    }

    /// Parse a `<select>` value, falling back to the default order.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|o| o.as_str() == raw).unwrap_or_default()
    }
}

/// Apply `filter`, then order by `sort`. Ties keep their input order.
#[must_use]
pub fn filter_and_sort(anomalies: &[AnomalyRecord], filter: SeverityFilter, sort: SortOrder) -> Vec<AnomalyRecord> {
    let mut out: Vec<AnomalyRecord> = anomalies.iter().filter(|a| filter.matches(a)).cloned().collect();
    match sort {
        SortOrder::Newest => out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortOrder::Oldest => out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortOrder::Severity => out.sort_by_key(|a| severity_rank(a.severity.as_deref())),
    }
    out
}

/// Counts per bucket over the unfiltered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlertStats {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
    pub low: usize,
}

impl AlertStats {
    #[must_use]
    pub fn from_anomalies(anomalies: &[AnomalyRecord]) -> Self {
        anomalies.iter().fold(Self { total: anomalies.len(), ..Self::default() }, |mut stats, a| {
            match SeverityBucket::of(a.severity.as_deref()) {
                Some(SeverityBucket::Critical) => stats.critical += 1,
                Some(SeverityBucket::Warning) => stats.warning += 1,
                Some(SeverityBucket::Low) => stats.low += 1,
                None => {}
            }
            stats
        })
    }
}

/// Alerts page state.
#[derive(Clone, Debug, Default)]
pub struct AlertsState {
    pub items: Vec<AnomalyRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: SeverityFilter,
    pub sort: SortOrder,
}

impl AlertsState {
    #[must_use]
    pub fn visible(&self) -> Vec<AnomalyRecord> {
        filter_and_sort(&self.items, self.filter, self.sort)
    }

    #[must_use]
    pub fn stats(&self) -> AlertStats {
        AlertStats::from_anomalies(&self.items)
    }

    /// Message shown when the filtered list is empty.
    #[must_use]
    pub fn empty_message(&self) -> String {
        match self.filter {
            SeverityFilter::All => "No anomalies detected in the system".to_owned(),
            other => format!("No {} severity alerts", other.as_str()),
        }
    }

    /// Footer line such as `Showing 2 of 5 alerts (filtered by critical)`.
    #[must_use]
    pub fn results_summary(&self) -> String {
        let shown = self.visible().len();
        let total = self.items.len();
        match self.filter {
            SeverityFilter::All => format!("Showing {shown} of {total} alerts"),
            other => format!("Showing {shown} of {total} alerts (filtered by {})", other.as_str()),
        }
    }
}
