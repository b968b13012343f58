//! Small `document` helpers for state that lives outside the Leptos tree.

/// Body class set while a score lookup is in flight.
pub const LOADING_ACTIVE_CLASS: &str = "loading-active";

/// Add or remove `class` on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let _ = body.class_list().toggle_with_force(class, enabled);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, enabled);
    }
}
