use super::*;

#[test]
fn dismiss_delay_is_three_seconds() {
    assert_eq!(ALERT_DISMISS_MS, 3000);
}

#[test]
fn kind_maps_to_css_class() {
    assert_eq!(AlertKind::Error.css_class(), "alert-error");
    assert_eq!(AlertKind::Success.css_class(), "alert-success");
}

#[test]
fn show_replaces_current_alert() {
    let mut alerts = AlertState::default();
    alerts.show(AlertKind::Error, "first");
    alerts.show(AlertKind::Success, "second");
    let current = alerts.current.clone().unwrap();
    assert_eq!(current.kind, AlertKind::Success);
    assert_eq!(current.message, "second");
}

#[test]
fn dismiss_clears_matching_alert() {
    let mut alerts = AlertState::default();
    let id = alerts.show(AlertKind::Error, "boom");
    alerts.dismiss(id);
    assert!(alerts.current.is_none());
}

#[test]
fn stale_dismiss_leaves_newer_alert() {
    let mut alerts = AlertState::default();
    let stale = alerts.show(AlertKind::Error, "old");
    let fresh = alerts.show(AlertKind::Error, "new");
    assert_ne!(stale, fresh);

    alerts.dismiss(stale);
    assert_eq!(alerts.message(), Some("new"));

    alerts.dismiss(fresh);
    assert_eq!(alerts.message(), None);
}

#[test]
fn dismiss_on_empty_banner_is_noop() {
    let mut alerts = AlertState::default();
    alerts.dismiss(1);
    assert!(alerts.current.is_none());
}

#[test]
fn clear_then_show_allocates_new_id() {
    let mut alerts = AlertState::default();
    let a = alerts.show(AlertKind::Error, "a");
    alerts.clear();
    assert_eq!(alerts.current_id(), None);
    let b = alerts.show(AlertKind::Error, "b");
    assert!(b > a);
}
