//! Score lookup page: query form, loading indicator, and result view.
//!
//! ARCHITECTURE
//! ============
//! `QueryState` decides every transition; this page only performs the side
//! effects it asks for (the fetch and the `loading-active` body class).
//! Only one request can be in flight because the form, the only way to
//! submit, is hidden while loading.

#[cfg(test)]
#[path = "score_query_test.rs"]
mod score_query_test;

use leptos::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::score_result::ScoreResult;
use crate::components::top_buttons::TopButtons;
use crate::state::query::{QueryState, QueryView, SubmitOutcome};
use crate::util::dom::{LOADING_ACTIVE_CLASS, set_body_class};

/// Enter in either input submits the form.
fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

#[component]
pub fn ScoreQueryPage() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    let loading_active = Memo::new(move |_| query.with(QueryState::loading_active));
    Effect::new(move || set_body_class(LOADING_ACTIVE_CLASS, loading_active.get()));

    let run_query = move || {
        let outcome = query.try_update(QueryState::submit).unwrap_or(SubmitOutcome::Ignored);
        let SubmitOutcome::Started(request) = outcome else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_score(&request).await;
            query.update(|q| {
                q.finish(result, || {
                    crate::util::timestamp::format_score_timestamp(crate::util::timestamp::now_local())
                });
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_keypress = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            run_query();
        }
    };

    let view_is = move |v: QueryView| move || query.with(|q| q.view == v);

    view! {
        <TopButtons/>
        <main class="container">
            <AlertBanner/>
            <Show when=view_is(QueryView::Form)>
                <section id="querySection" class="query-section">
                    <input
                        id="studentId"
                        class="query-input"
                        type="text"
                        placeholder="學號"
                        prop:value=move || query.with(|q| q.student_id.clone())
                        on:input=move |ev| query.update(|q| q.student_id = event_target_value(&ev))
                        on:keypress=on_keypress
                    />
                    <input
                        id="studentName"
                        class="query-input"
                        type="text"
                        placeholder="姓名"
                        prop:value=move || query.with(|q| q.student_name.clone())
                        on:input=move |ev| query.update(|q| q.student_name = event_target_value(&ev))
                        on:keypress=on_keypress
                    />
                    <button class="btn query-button" on:click=move |_| run_query()>
                        "查詢成績"
                    </button>
                </section>
            </Show>
            <Show when=view_is(QueryView::Loading)>
                <div id="loading" class="loading">
                    <div class="loading__spinner"></div>
                    <p>"查詢中..."</p>
                </div>
            </Show>
            <Show when=view_is(QueryView::Result)>
                <ScoreResult/>
            </Show>
        </main>
    }
}
