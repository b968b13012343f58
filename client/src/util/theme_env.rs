//! Browser-backed [`ThemeEnv`]: `localStorage`, `matchMedia`, and the
//! `data-theme` attribute on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_env_test.rs"]
mod theme_env_test;

use crate::state::theme::{Theme, ThemeEnv};
#[cfg(feature = "hydrate")]
use crate::state::theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};

#[cfg(feature = "hydrate")]
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeEnv;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn root_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

impl ThemeEnv for BrowserThemeEnv {
    fn stored(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&mut self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn applied(&self) -> Option<Theme> {
        #[cfg(feature = "hydrate")]
        {
            root_element()?
                .get_attribute(THEME_ATTRIBUTE)
                .as_deref()
                .and_then(Theme::parse)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn apply(&mut self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = root_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}

/// Call `on_change(prefers_dark)` whenever the OS color scheme flips.
///
/// The listener stays registered for the lifetime of the page.
pub fn watch_os_preference(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten()) else {
            return;
        };
        let cb = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        });
        if mq
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}
