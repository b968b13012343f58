use super::*;

#[test]
fn narrow_viewport_uses_mobile_threshold() {
    assert_eq!(hide_threshold(375.0), 20.0);
    assert_eq!(hide_threshold(768.0), 20.0);
}

#[test]
fn wide_viewport_uses_desktop_threshold() {
    assert_eq!(hide_threshold(769.0), 50.0);
    assert_eq!(hide_threshold(1440.0), 50.0);
}

#[test]
fn toolbar_hides_only_past_threshold() {
    assert!(!toolbar_hidden_at(20.0, 400.0));
    assert!(toolbar_hidden_at(21.0, 400.0));
    assert!(!toolbar_hidden_at(50.0, 1024.0));
    assert!(toolbar_hidden_at(50.5, 1024.0));
    assert!(!toolbar_hidden_at(0.0, 1024.0));
}

#[test]
fn read_scroll_metrics_is_none_off_browser() {
    #[cfg(not(feature = "hydrate"))]
    assert_eq!(read_scroll_metrics(), None);
}
