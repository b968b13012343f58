//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (toolbar, alert banner, result card) while
//! reading/writing shared state from Leptos context providers.

pub mod alert_banner;
pub mod score_result;
pub mod top_buttons;
