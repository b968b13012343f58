//! Transient alert banner above the query form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `QueryState::alert` and owns the auto-dismiss timer. Each newly
//! shown alert replaces the pending timer, which cancels the old one.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::alert::ALERT_DISMISS_MS;
use crate::state::query::QueryState;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    #[cfg(feature = "hydrate")]
    {
        let alert_id = Memo::new(move |_| query.with(|q| q.alert.current_id()));
        let timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
        Effect::new(move || {
            let Some(id) = alert_id.get() else {
                timer.set_value(None);
                return;
            };
            let pending = gloo_timers::callback::Timeout::new(ALERT_DISMISS_MS, move || {
                query.update(|q| q.alert.dismiss(id));
            });
            timer.set_value(Some(pending));
        });
    }

    let alert = move || query.with(|q| q.alert.current.clone());

    view! {
        <div id="alert-container">
            {move || {
                alert()
                    .map(|a| {
                        view! {
                            <div class=format!("alert {}", a.kind.css_class())>{a.message}</div>
                        }
                    })
            }}
        </div>
    }
}
