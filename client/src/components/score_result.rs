//! Result view for a successful lookup.

use leptos::prelude::*;

use crate::net::types::ScoreCard;
use crate::state::query::QueryState;

fn card_field(
    query: RwSignal<QueryState>,
    pick: fn(&ScoreCard) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || query.with(|q| q.result.as_ref().map(pick).unwrap_or_default())
}

#[component]
pub fn ScoreResult() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    view! {
        <section id="result-section" class="result-section">
            <p class="score-date" id="scoreDate">{card_field(query, |c| c.scored_at.clone())}</p>
            <dl class="student-info">
                <dt>"學號"</dt>
                <dd id="displayStudentId">{card_field(query, |c| c.student_id.clone())}</dd>
                <dt>"姓名"</dt>
                <dd id="displayName">{card_field(query, |c| c.name.clone())}</dd>
                <dt>"系級"</dt>
                <dd id="displayDepartment">{card_field(query, |c| c.department.clone())}</dd>
            </dl>
            <table class="score-table">
                <tbody>
                    <tr>
                        <th>"HW1"</th>
                        <td id="hw1Score">{card_field(query, |c| c.hw1.clone())}</td>
                    </tr>
                    <tr>
                        <th>"HW2"</th>
                        <td id="hw2Score">{card_field(query, |c| c.hw2.clone())}</td>
                    </tr>
                    <tr>
                        <th>"HW3"</th>
                        <td id="hw3Score">{card_field(query, |c| c.hw3.clone())}</td>
                    </tr>
                    <tr class="score-table__total">
                        <th>"Total"</th>
                        <td id="totalScore">{card_field(query, |c| c.total_score.clone())}</td>
                    </tr>
                </tbody>
            </table>
            <button class="btn back-button" on:click=move |_| query.update(QueryState::back_to_login)>
                "返回查詢"
            </button>
        </section>
    }
}
