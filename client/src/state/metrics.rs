//! ML metrics page: detector scores as percentage bars.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

use crate::net::types::{AnomalyCurvePoint, MlMetrics};

#[derive(Clone, Debug, PartialEq)]
pub struct MetricBar {
    pub name: &'static str,
    /// Value in percent (0..=100 for well-formed input).
    pub percent: f64,
}

/// `part / total` as a percentage; zero when `total` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[must_use]
pub fn metric_bars(metrics: &MlMetrics) -> Vec<MetricBar> {
    vec![
        MetricBar { name: "Precision", percent: metrics.precision * 100.0 },
        MetricBar { name: "Recall", percent: metrics.recall * 100.0 },
        MetricBar { name: "F1-score", percent: metrics.f1_score * 100.0 },
        MetricBar { name: "False Positive Rate", percent: metrics.false_positive_rate * 100.0 },
        MetricBar { name: "Total anomalies", percent: share(metrics.total_anomalies, metrics.total_readings) },
        MetricBar { name: "True Positives", percent: share(metrics.true_positives, metrics.total_readings) },
    ]
}

/// Bar width for CSS, clamped to `0..=100`. Non-finite input draws no bar.
#[must_use]
pub fn bar_width(percent: f64) -> String {
    let percent = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
    format!("{percent:.1}%")
}

/// Largest count in the curve, used to scale the anomalies-over-time bars.
#[must_use]
pub fn curve_peak(points: &[AnomalyCurvePoint]) -> u64 {
    points.iter().map(|p| p.count).max().unwrap_or(0)
}

#[derive(Clone, Debug, Default)]
pub struct MetricsState {
    pub metrics: Option<MlMetrics>,
    pub curve: Vec<AnomalyCurvePoint>,
    pub loading: bool,
    pub error: Option<String>,
}
