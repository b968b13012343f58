use super::*;
use serde_json::json;

fn form(id: &str, name: &str) -> QueryState {
    QueryState { student_id: id.to_owned(), student_name: name.to_owned(), ..QueryState::default() }
}

fn loading() -> QueryState {
    let mut state = form("A1", "Bob");
    assert!(matches!(state.submit(), SubmitOutcome::Started(_)));
    state
}

fn response(value: serde_json::Value) -> ScoreResponse {
    serde_json::from_value(value).unwrap()
}

fn bob() -> ScoreResponse {
    response(json!({
        "success": true,
        "studentId": "A1",
        "name": "Bob",
        "department": "CS",
        "hw1": 90,
        "hw2": 85,
        "hw3": 80,
        "totalScore": 255
    }))
}

// =============================================================
// QueryView transitions
// =============================================================

#[test]
fn view_default_is_form() {
    assert_eq!(QueryView::default(), QueryView::Form);
}

#[test]
fn transitions_follow_lookup_lifecycle() {
    assert_eq!(QueryView::Form.transition(QueryEvent::Submit), QueryView::Loading);
    assert_eq!(QueryView::Loading.transition(QueryEvent::Found), QueryView::Result);
    assert_eq!(QueryView::Loading.transition(QueryEvent::Rejected), QueryView::Form);
    assert_eq!(QueryView::Loading.transition(QueryEvent::Failed), QueryView::Form);
    assert_eq!(QueryView::Result.transition(QueryEvent::BackToLogin), QueryView::Form);
}

#[test]
fn inapplicable_events_keep_view() {
    assert_eq!(QueryView::Loading.transition(QueryEvent::Submit), QueryView::Loading);
    assert_eq!(QueryView::Result.transition(QueryEvent::Submit), QueryView::Result);
    assert_eq!(QueryView::Form.transition(QueryEvent::Found), QueryView::Form);
    assert_eq!(QueryView::Form.transition(QueryEvent::BackToLogin), QueryView::Form);
    assert_eq!(QueryView::Result.transition(QueryEvent::Failed), QueryView::Result);
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_with_blank_field_shows_missing_input_alert() {
    for (id, name) in [("", "Bob"), ("A1", ""), ("   ", "Bob"), ("A1", " \t "), ("", "")] {
        let mut state = form(id, name);
        let outcome = state.submit();
        assert!(matches!(outcome, SubmitOutcome::Invalid { .. }), "{id:?}/{name:?}");
        assert_eq!(state.view, QueryView::Form);
        assert_eq!(state.alert.message(), Some(MISSING_INPUT_MESSAGE));
        assert_eq!(state.alert.current.as_ref().unwrap().kind, AlertKind::Error);
        assert!(!state.loading_active());
    }
}

#[test]
fn submit_trims_inputs_and_starts_loading() {
    let mut state = form("  A1 ", " Bob\n");
    state.alert.show(AlertKind::Error, "stale");

    let outcome = state.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Started(ScoreQuery { student_id: "A1".to_owned(), student_name: "Bob".to_owned() })
    );
    assert_eq!(state.view, QueryView::Loading);
    assert!(state.loading_active());
    assert!(state.alert.current.is_none());
}

#[test]
fn submit_is_ignored_while_loading() {
    let mut state = loading();
    assert_eq!(state.submit(), SubmitOutcome::Ignored);
    assert_eq!(state.view, QueryView::Loading);
}

// =============================================================
// finish
// =============================================================

#[test]
fn finish_success_shows_result_fields() {
    let mut state = loading();
    let alert = state.finish(Ok(bob()), || "October 16, 2026, 3:05 PM GMT+8".to_owned());

    assert_eq!(alert, None);
    assert_eq!(state.view, QueryView::Result);
    assert!(!state.loading_active());
    let card = state.result.clone().unwrap();
    assert_eq!(card.scored_at, "October 16, 2026, 3:05 PM GMT+8");
    assert_eq!(card.student_id, "A1");
    assert_eq!(card.name, "Bob");
    assert_eq!(card.department, "CS");
    assert_eq!(card.hw1, "90");
    assert_eq!(card.hw2, "85");
    assert_eq!(card.hw3, "80");
    assert_eq!(card.total_score, "255");
}

#[test]
fn finish_rejection_returns_to_form_with_server_message() {
    let mut state = loading();
    let alert = state.finish(Ok(response(json!({ "success": false, "message": "Not found" }))), || {
        panic!("no timestamp for failures")
    });

    assert!(alert.is_some());
    assert_eq!(state.view, QueryView::Form);
    assert!(!state.loading_active());
    assert_eq!(state.alert.message(), Some("Not found"));
    assert!(state.result.is_none());
}

#[test]
fn finish_rejection_without_message_shows_empty_alert() {
    let mut state = loading();
    state.finish(Ok(response(json!({ "success": false }))), String::new);
    assert_eq!(state.alert.message(), Some(""));
}

#[test]
fn finish_transport_error_shows_system_error() {
    let mut state = loading();
    let alert = state.finish(Err(ScoreQueryError::Transport("offline".to_owned())), String::new);

    assert!(alert.is_some());
    assert_eq!(state.view, QueryView::Form);
    assert!(!state.loading_active());
    assert_eq!(state.alert.message(), Some(SYSTEM_ERROR_MESSAGE));
}

#[test]
fn finish_decode_error_shows_system_error() {
    let mut state = loading();
    state.finish(Err(ScoreQueryError::Decode("expected value".to_owned())), String::new);
    assert_eq!(state.view, QueryView::Form);
    assert_eq!(state.alert.message(), Some(SYSTEM_ERROR_MESSAGE));
}

#[test]
fn finish_outside_loading_is_ignored() {
    let mut state = form("A1", "Bob");
    assert_eq!(state.finish(Ok(bob()), String::new), None);
    assert_eq!(state.view, QueryView::Form);
    assert!(state.result.is_none());
}

#[test]
fn alert_from_finish_clears_after_dismiss() {
    let mut state = loading();
    let id = state.finish(Err(ScoreQueryError::Transport("offline".to_owned())), String::new).unwrap();
    state.alert.dismiss(id);
    assert!(state.alert.current.is_none());
}

// =============================================================
// back_to_login
// =============================================================

#[test]
fn back_to_login_resets_form() {
    let mut state = loading();
    state.finish(Ok(bob()), String::new);
    state.toolbar_hidden = true;

    state.back_to_login();
    assert_eq!(state.view, QueryView::Form);
    assert_eq!(state.student_id, "");
    assert_eq!(state.student_name, "");
    assert!(!state.toolbar_hidden);
}

#[test]
fn back_to_login_ignored_on_form() {
    let mut state = form("A1", "Bob");
    state.back_to_login();
    assert_eq!(state.student_id, "A1");
}

#[test]
fn new_query_after_result_refetches() {
    let mut state = loading();
    state.finish(Ok(bob()), String::new);
    state.back_to_login();
    state.student_id = "A1".to_owned();
    state.student_name = "Bob".to_owned();
    assert!(matches!(state.submit(), SubmitOutcome::Started(_)));
}

// =============================================================
// scrolled
// =============================================================

#[test]
fn scroll_ignored_unless_result_visible() {
    for mut state in [form("A1", "Bob"), loading()] {
        assert!(!state.scrolled(500.0, 1024.0));
        assert!(!state.toolbar_hidden);
        assert!(!state.scrolled(500.0, 375.0));
        assert!(!state.toolbar_hidden);
    }
}

#[test]
fn scroll_on_result_toggles_toolbar() {
    let mut state = loading();
    state.finish(Ok(bob()), String::new);

    assert!(state.scrolled(60.0, 1024.0));
    assert!(state.toolbar_hidden);
    assert!(!state.scrolled(80.0, 1024.0));
    assert!(state.scrolled(50.0, 1024.0));
    assert!(!state.toolbar_hidden);
    assert!(state.scrolled(30.0, 375.0));
    assert!(state.toolbar_hidden);
}
