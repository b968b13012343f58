//! Scroll threshold for the fixed top toolbar.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Viewports at or below this width use the mobile threshold.
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;
pub const MOBILE_HIDE_THRESHOLD_PX: f64 = 20.0;
pub const DESKTOP_HIDE_THRESHOLD_PX: f64 = 50.0;

#[must_use]
pub fn hide_threshold(viewport_width: f64) -> f64 {
    if viewport_width <= MOBILE_MAX_WIDTH_PX {
        MOBILE_HIDE_THRESHOLD_PX
    } else {
        DESKTOP_HIDE_THRESHOLD_PX
    }
}

/// Whether the toolbar should be hidden at `scroll_top`.
#[must_use]
pub fn toolbar_hidden_at(scroll_top: f64, viewport_width: f64) -> bool {
    scroll_top > hide_threshold(viewport_width)
}

/// Current `(scroll_top, viewport_width)` of the window.
pub fn read_scroll_metrics() -> Option<(f64, f64)> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let scroll_top = window.scroll_y().ok()?;
        let width = window.inner_width().ok()?.as_f64()?;
        Some((scroll_top, width))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
