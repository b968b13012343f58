//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`alert`, `query`, `theme`) so components can
//! depend on small focused models that test without a browser.

pub mod alert;
pub mod query;
pub mod theme;
