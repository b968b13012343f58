//! Score lookup flow state: form inputs, which section is visible, the
//! rendered result, the alert banner, and the toolbar scroll flag.
//!
//! DESIGN
//! ======
//! Visibility is a single [`QueryView`] so the form, loading indicator, and
//! result view can never be shown together. Every state change goes through
//! [`QueryView::transition`]; the page only performs the side effects
//! (fetch, timers, DOM classes) that these methods ask for.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::api::ScoreQueryError;
use crate::net::types::{ScoreCard, ScoreQuery, ScoreResponse};
use crate::state::alert::{AlertKind, AlertState};
use crate::util::scroll::toolbar_hidden_at;

/// Shown when either input is blank after trimming.
pub const MISSING_INPUT_MESSAGE: &str = "請輸入學號和姓名";
/// Shown for any transport or decode failure.
pub const SYSTEM_ERROR_MESSAGE: &str = "系統錯誤，請稍後再試";

/// Which of the three mutually exclusive sections is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryView {
    #[default]
    Form,
    Loading,
    Result,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryEvent {
    /// Valid inputs submitted.
    Submit,
    /// Endpoint answered `success: true`.
    Found,
    /// Endpoint answered `success: false`.
    Rejected,
    /// Request or body decoding failed.
    Failed,
    BackToLogin,
}

impl QueryView {
    /// Next view for `event`. Events that do not apply to the current view
    /// leave it unchanged.
    #[must_use]
    pub fn transition(self, event: QueryEvent) -> Self {
        match (self, event) {
            (Self::Form, QueryEvent::Submit) => Self::Loading,
            (Self::Loading, QueryEvent::Found) => Self::Result,
            (Self::Loading, QueryEvent::Rejected | QueryEvent::Failed) => Self::Form,
            (Self::Result, QueryEvent::BackToLogin) => Self::Form,
            (view, _) => view,
        }
    }
}

/// What the page must do after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not on the form; nothing happened.
    Ignored,
    /// Inputs were blank; an alert with this id is showing.
    Invalid { alert_id: u64 },
    /// Loading; send this request.
    Started(ScoreQuery),
}

#[derive(Clone, Debug, Default)]
pub struct QueryState {
    pub view: QueryView,
    pub student_id: String,
    pub student_name: String,
    pub result: Option<ScoreCard>,
    pub alert: AlertState,
    pub toolbar_hidden: bool,
}

impl QueryState {
    /// Body-level loading flag; true exactly while the request is in flight.
    #[must_use]
    pub fn loading_active(&self) -> bool {
        self.view == QueryView::Loading
    }

    /// Validate inputs and, if both are present, move to loading.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.view != QueryView::Form {
            return SubmitOutcome::Ignored;
        }
        self.alert.clear();

        let student_id = self.student_id.trim();
        let student_name = self.student_name.trim();
        if student_id.is_empty() || student_name.is_empty() {
            let alert_id = self.alert.show(AlertKind::Error, MISSING_INPUT_MESSAGE);
            return SubmitOutcome::Invalid { alert_id };
        }

        let query = ScoreQuery { student_id: student_id.to_owned(), student_name: student_name.to_owned() };
        self.view = self.view.transition(QueryEvent::Submit);
        SubmitOutcome::Started(query)
    }

    /// Apply the lookup outcome. `stamp` is only called on success.
    ///
    /// Returns the id of the alert shown, if any.
    pub fn finish(
        &mut self,
        outcome: Result<ScoreResponse, ScoreQueryError>,
        stamp: impl FnOnce() -> String,
    ) -> Option<u64> {
        if self.view != QueryView::Loading {
            return None;
        }
        match outcome {
            Ok(response) if response.success => {
                self.result = Some(ScoreCard::from_response(&response, stamp()));
                self.toolbar_hidden = false;
                self.view = self.view.transition(QueryEvent::Found);
                None
            }
            Ok(response) => {
                self.view = self.view.transition(QueryEvent::Rejected);
                let message = response.message.unwrap_or_default();
                Some(self.alert.show(AlertKind::Error, message))
            }
            Err(e) => {
                leptos::logging::error!("score query failed: {e}");
                self.view = self.view.transition(QueryEvent::Failed);
                Some(self.alert.show(AlertKind::Error, SYSTEM_ERROR_MESSAGE))
            }
        }
    }

    /// Leave the result view and reset the form.
    pub fn back_to_login(&mut self) {
        if self.view != QueryView::Result {
            return;
        }
        self.view = self.view.transition(QueryEvent::BackToLogin);
        self.student_id.clear();
        self.student_name.clear();
        self.toolbar_hidden = false;
    }

    /// Update the toolbar flag for a scroll position. Only the result view
    /// reacts. Returns whether the flag changed.
    pub fn scrolled(&mut self, scroll_top: f64, viewport_width: f64) -> bool {
        if self.view != QueryView::Result {
            return false;
        }
        let hidden = toolbar_hidden_at(scroll_top, viewport_width);
        let changed = hidden != self.toolbar_hidden;
        self.toolbar_hidden = hidden;
        changed
    }
}
