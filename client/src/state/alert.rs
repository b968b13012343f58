//! Transient alert banner state.
//!
//! Each shown alert gets a fresh id. The dismiss timer carries the id it was
//! scheduled for, so a timer left over from an earlier alert never clears a
//! newer one.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Delay before an alert clears itself.
pub const ALERT_DISMISS_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Error => "alert-error",
            Self::Success => "alert-success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    pub current: Option<Alert>,
    next_id: u64,
}

impl AlertState {
    /// Replace the banner content. Returns the id the dismiss timer must use.
    pub fn show(&mut self, kind: AlertKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Alert { id, kind, message: message.into() });
        id
    }

    /// Timer callback: clear only if `id` is still the alert on screen.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|a| a.id == id) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(|a| a.id)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.message.as_str())
    }
}
