//! Root application component and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::score_query::ScoreQueryPage;
use crate::state::query::QueryState;
use crate::state::theme::Theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-Hant">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and, once hydrated, wires the theme
/// and window listeners.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let query = RwSignal::new(QueryState::default());
    let theme = RwSignal::new(Theme::default());
    provide_context(query);
    provide_context(theme);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        bootstrap(query, theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/score-lookup.css"/>
        <Title text="成績查詢"/>
        <ScoreQueryPage/>
    }
}

#[cfg(feature = "hydrate")]
fn bootstrap(query: RwSignal<QueryState>, theme: RwSignal<Theme>) {
    use crate::state::theme::ThemeController;
    use crate::util::scroll::read_scroll_metrics;
    use crate::util::theme_env::{BrowserThemeEnv, watch_os_preference};

    let initial = ThemeController::new(BrowserThemeEnv).init();
    theme.set(initial);
    log::debug!("theme initialised: {}", initial.as_str());

    watch_os_preference(move |prefers_dark| {
        if let Some(next) = ThemeController::new(BrowserThemeEnv).os_preference_changed(prefers_dark) {
            theme.set(next);
        }
    });

    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let Some((scroll_top, width)) = read_scroll_metrics() else {
            return;
        };
        query.maybe_update(|q| q.scrolled(scroll_top, width));
    });
}
