//! Fixed top toolbar holding the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hidden while scrolled down in the result view (`QueryState::toolbar_hidden`).
//! The toggle label names the theme a click switches to.

use leptos::prelude::*;

use crate::state::query::QueryState;
use crate::state::theme::{Theme, ThemeController};
use crate::util::theme_env::BrowserThemeEnv;

#[component]
pub fn TopButtons() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();
    let theme = expect_context::<RwSignal<Theme>>();

    let on_toggle = move |_| {
        let next = ThemeController::new(BrowserThemeEnv).toggle();
        theme.set(next);
    };

    view! {
        <div class="top-buttons" class:hidden=move || query.with(|q| q.toolbar_hidden)>
            <button class="btn theme-toggle" on:click=on_toggle title="Toggle theme">
                <span id="theme-text">{move || theme.get().toggle_label()}</span>
            </button>
        </div>
    }
}
