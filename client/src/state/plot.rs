//! Plot detail state: per-plot readings, time-range windows, and statistics.

#[cfg(test)]
#[path = "plot_test.rs"]
mod plot_test;

use chrono::{DateTime, Duration, Utc};

use crate::net::types::{AnomalyRecord, SensorKind, SensorReading};

/// Look-back window for plot charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    OneHour,
    SixHours,
    #[default]
    Day,
    Week,
    All,
}

impl TimeRange {
    pub const ALL: [Self; 5] = [Self::OneHour, Self::SixHours, Self::Day, Self::Week, Self::All];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneHour => "1h",
            Self::SixHours => "6h",
            Self::Day => "24h",
            Self::Week => "7d",
            Self::All => "all",
        }
    }

    #[must_use]
    pub fn window(self) -> Option<Duration> {
        match self {
            Self::OneHour => Some(Duration::hours(1)),
            Self::SixHours => Some(Duration::hours(6)),
            Self::Day => Some(Duration::hours(24)),
            Self::Week => Some(Duration::days(7)),
            Self::All => None,
        }
    }

    /// Readings must be strictly newer than this instant.
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.window().map(|w| now - w)
    }

    #[must_use]
    pub fn includes(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.cutoff(now).is_none_or(|cutoff| timestamp > cutoff)
    }
}

/// Readings belonging to `plot`, inside `range`, oldest first.
#[must_use]
pub fn plot_readings(
    readings: &[SensorReading],
    plot: &str,
    range: TimeRange,
    now: DateTime<Utc>,
) -> Vec<SensorReading> {
    let mut out: Vec<SensorReading> = readings
        .iter()
        .filter(|r| r.plot_key() == Some(plot) && range.includes(r.timestamp, now))
        .cloned()
        .collect();
    out.sort_by_key(|r| r.timestamp);
    out
}

/// Anomalies belonging to `plot`, newest first.
#[must_use]
pub fn plot_anomalies(anomalies: &[AnomalyRecord], plot: &str) -> Vec<AnomalyRecord> {
    let mut out: Vec<AnomalyRecord> = anomalies.iter().filter(|a| a.plot_key() == Some(plot)).cloned().collect();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    out
}

/// Summary of one metric over a reading window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricStats {
    /// Most recent non-missing value.
    pub current: f64,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    /// Number of readings that carried the metric.
    pub samples: usize,
}

/// Stats for `kind` over time-ordered `readings`, skipping missing values.
/// `None` when no reading carries the metric.
#[must_use]
pub fn metric_stats(readings: &[SensorReading], kind: SensorKind) -> Option<MetricStats> {
    let values: Vec<f64> = readings.iter().filter_map(|r| r.metric(kind)).collect();
    let current = *values.last()?;
    let sum: f64 = values.iter().sum();
    #[allow(clippy::cast_precision_loss)]
    let avg = sum / values.len() as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(MetricStats { current, avg, min, max, samples: values.len() })
}

/// One row of the time-series table: a timestamp with whichever metrics the
/// reading carried.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesRow {
    pub timestamp: DateTime<Utc>,
    pub values: [Option<f64>; 3],
}

#[must_use]
pub fn series_rows(readings: &[SensorReading]) -> Vec<SeriesRow> {
    readings
        .iter()
        .map(|r| SeriesRow { timestamp: r.timestamp, values: SensorKind::ALL.map(|k| r.metric(k)) })
        .collect()
}

/// Plot detail page state.
#[derive(Clone, Debug, Default)]
pub struct PlotDetailState {
    /// Readings of the plot inside `range`, oldest first.
    pub readings: Vec<SensorReading>,
    /// Anomalies of the plot, newest first.
    pub anomalies: Vec<AnomalyRecord>,
    pub range: TimeRange,
    pub loading: bool,
    pub error: Option<String>,
    /// Plot the data belongs to; empty until one is chosen.
    plot: String,
    /// Last fetched readings before plot and range filtering.
    fetched: Vec<SensorReading>,
}

impl PlotDetailState {
    /// Initial state while the first fetch is in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    #[must_use]
    pub fn for_plot(plot: &str) -> Self {
        Self { plot: plot.to_owned(), ..Self::loading() }
    }

    #[must_use]
    pub fn plot(&self) -> &str {
        &self.plot
    }

    /// Point the state at `plot`, dropping the previous plot's data.
    /// Returns `false` when `plot` is already current.
    pub fn switch_plot(&mut self, plot: &str) -> bool {
        if self.plot == plot {
            return false;
        }
        self.plot = plot.to_owned();
        self.readings.clear();
        self.anomalies.clear();
        self.fetched.clear();
        self.error = None;
        self.loading = true;
        true
    }

    /// Results fetched for `plot` are stale once another plot is current.
    fn is_stale(&self, plot: &str) -> bool {
        !self.plot.is_empty() && self.plot != plot
    }

    /// Record a failed fetch for `plot`.
    pub fn fail(&mut self, plot: &str, message: String) {
        if self.is_stale(plot) {
            return;
        }
        self.loading = false;
        self.error = Some(message);
    }

    /// Replace data from freshly fetched collections. Ignored when `plot` is
    /// no longer current.
    pub fn apply(
        &mut self,
        plot: &str,
        readings: &[SensorReading],
        anomalies: &[AnomalyRecord],
        now: DateTime<Utc>,
    ) {
        if self.is_stale(plot) {
            return;
        }
        self.loading = false;
        self.fetched = readings.to_vec();
        self.readings = plot_readings(readings, plot, self.range, now);
        self.anomalies = plot_anomalies(anomalies, plot);
        self.error = None;
    }

    /// Switch the window and re-filter the last fetched readings.
    pub fn set_range(&mut self, range: TimeRange, plot: &str, now: DateTime<Utc>) {
        self.range = range;
        self.readings = plot_readings(&self.fetched, plot, range, now);
    }

    #[must_use]
    pub fn stats(&self, kind: SensorKind) -> Option<MetricStats> {
        metric_stats(&self.readings, kind)
    }
}
