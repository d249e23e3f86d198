use super::*;

#[test]
fn critical_and_high_share_a_class() {
    assert_eq!(status_class(Some("critical")), "status-critical");
    assert_eq!(status_class(Some("HIGH")), "status-critical");
}

#[test]
fn warning_and_medium_share_a_class() {
    assert_eq!(status_class(Some("Warning")), "status-warning");
    assert_eq!(status_class(Some("medium")), "status-warning");
}

#[test]
fn healthy_statuses_are_normal() {
    for status in ["normal", "low", "healthy"] {
        assert_eq!(status_class(Some(status)), "status-normal", "{status}");
    }
}

#[test]
fn unrecognized_or_missing_is_unknown() {
    assert_eq!(status_class(Some("sideways")), "status-unknown");
    assert_eq!(status_class(None), "status-unknown");
}

#[test]
fn label_defaults_to_unknown() {
    assert_eq!(status_label(None), "Unknown");
    assert_eq!(status_label(Some("")), "Unknown");
    assert_eq!(status_label(Some("high")), "high");
}

#[test]
fn badge_takes_severity_as_optional_record_field() {
    let severity: Option<String> = Some("high".to_owned());
    let props = StatusBadgeProps::builder().status(severity).build();
    assert_eq!(props.status.as_deref(), Some("high"));

    let props = StatusBadgeProps::builder().build();
    assert_eq!(status_label(props.status.as_deref()), "Unknown");
}
