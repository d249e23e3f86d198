//! Dashboard overview: readings and anomalies grouped by plot.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::alerts::SeverityBucket;
use crate::net::types::{AnomalyRecord, SensorKind, SensorReading};

/// Latest known values and anomaly counts for one plot.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSummary {
    pub plot: String,
    pub readings: usize,
    /// Latest value per metric, in `SensorKind::ALL` order.
    pub latest: [Option<f64>; 3],
    pub last_seen: Option<DateTime<Utc>>,
    pub anomalies: usize,
    /// Most severe bucket among the plot's anomalies.
    pub worst: Option<SeverityBucket>,
}

impl PlotSummary {
    fn new(plot: &str) -> Self {
        Self { plot: plot.to_owned(), readings: 0, latest: [None; 3], last_seen: None, anomalies: 0, worst: None }
    }

    #[must_use]
    pub fn latest(&self, kind: SensorKind) -> Option<f64> {
        let index = SensorKind::ALL.iter().position(|k| *k == kind)?;
        self.latest[index]
    }
}

/// Group records by plot key. Records without a plot reference are skipped.
///
/// Integer plot keys come first in numeric order, then the rest lexically.
#[must_use]
pub fn summarize_plots(readings: &[SensorReading], anomalies: &[AnomalyRecord]) -> Vec<PlotSummary> {
    let mut plots: BTreeMap<String, (PlotSummary, [Option<DateTime<Utc>>; 3])> = BTreeMap::new();

    for reading in readings {
        let Some(key) = reading.plot_key() else { continue };
        let (summary, seen) = plots.entry(key.to_owned()).or_insert_with(|| (PlotSummary::new(key), [None; 3]));
        summary.readings += 1;
        if summary.last_seen.is_none_or(|t| reading.timestamp > t) {
            summary.last_seen = Some(reading.timestamp);
        }
        for (i, kind) in SensorKind::ALL.into_iter().enumerate() {
            let Some(value) = reading.metric(kind) else { continue };
            if seen[i].is_none_or(|t| reading.timestamp >= t) {
                seen[i] = Some(reading.timestamp);
                summary.latest[i] = Some(value);
            }
        }
    }

    for anomaly in anomalies {
        let Some(key) = anomaly.plot_key() else { continue };
        let (summary, _) = plots.entry(key.to_owned()).or_insert_with(|| (PlotSummary::new(key), [None; 3]));
        summary.anomalies += 1;
        if let Some(bucket) = SeverityBucket::of(anomaly.severity.as_deref()) {
            summary.worst = Some(summary.worst.map_or(bucket, |w| w.min(bucket)));
        }
    }

    let mut out: Vec<PlotSummary> = plots.into_values().map(|(summary, _)| summary).collect();
    out.sort_by(|a, b| compare_plot_keys(&a.plot, &b.plot));
    out
}

fn compare_plot_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// The `limit` most recent anomalies, newest first.
#[must_use]
pub fn recent_anomalies(anomalies: &[AnomalyRecord], limit: usize) -> Vec<AnomalyRecord> {
    let mut out = anomalies.to_vec();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    out.truncate(limit);
    out
}

/// Dashboard page state shared by the admin and farmer views.
#[derive(Clone, Debug, Default)]
pub struct OverviewState {
    pub readings: Vec<SensorReading>,
    pub anomalies: Vec<AnomalyRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OverviewState {
    #[must_use]
    pub fn plots(&self) -> Vec<PlotSummary> {
        summarize_plots(&self.readings, &self.anomalies)
    }
}
