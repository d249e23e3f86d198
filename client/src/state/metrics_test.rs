use super::*;

fn sample() -> MlMetrics {
    MlMetrics {
        precision: 0.8,
        recall: 0.5,
        f1_score: 0.25,
        false_positive_rate: 0.1,
        total_anomalies: 20,
        total_readings: 400,
        true_positives: 16,
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn bars_convert_fractions_to_percent() {
    let bars = metric_bars(&sample());
    let names: Vec<&str> = bars.iter().map(|b| b.name).collect();
    assert_eq!(
        names,
        ["Precision", "Recall", "F1-score", "False Positive Rate", "Total anomalies", "True Positives"]
    );
    assert!(close(bars[0].percent, 80.0));
    assert!(close(bars[2].percent, 25.0));
    assert!(close(bars[4].percent, 5.0));
    assert!(close(bars[5].percent, 4.0));
}

#[test]
fn shares_are_zero_without_readings() {
    let metrics = MlMetrics { total_readings: 0, ..sample() };
    let bars = metric_bars(&metrics);
    assert!(close(bars[4].percent, 0.0));
    assert!(close(bars[5].percent, 0.0));
}

#[test]
fn bar_width_is_clamped() {
    assert_eq!(bar_width(42.04), "42.0%");
    assert_eq!(bar_width(130.0), "100.0%");
    assert_eq!(bar_width(-3.0), "0.0%");
}

#[test]
fn bar_width_ignores_non_finite_scores() {
    assert_eq!(bar_width(f64::NAN), "0.0%");
    assert_eq!(bar_width(f64::INFINITY), "0.0%");
    let metrics = MlMetrics { precision: f64::NAN, ..sample() };
    assert_eq!(bar_width(metric_bars(&metrics)[0].percent), "0.0%");
}

#[test]
fn curve_peak_of_points() {
    let points = vec![
        AnomalyCurvePoint { time: "10:00".into(), count: 2 },
        AnomalyCurvePoint { time: "11:00".into(), count: 7 },
    ];
    assert_eq!(curve_peak(&points), 7);
    assert_eq!(curve_peak(&[]), 0);
}
