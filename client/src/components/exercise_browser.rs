//! Exercise browser tab: completion summary, filters, and the card grid.

#[cfg(test)]
#[path = "exercise_browser_test.rs"]
mod exercise_browser_test;

use leptos::prelude::*;

use crate::components::exercise_card::ExerciseCard;
use crate::components::progress_bar::ProgressBar;
use crate::state::exercises::{CATEGORIES, ExercisesState, difficulty_options};
use crate::util::percent::rounded;

/// `"2/4"` summary next to the progress bar.
pub fn summary_label(completed: usize, total: usize) -> String {
    format!("{completed}/{total}")
}

#[component]
pub fn ExerciseBrowser() -> impl IntoView {
    let exercises = expect_context::<RwSignal<ExercisesState>>();

    let completion = Signal::derive(move || exercises.get().completion_percent());
    let visible = move || exercises.get().visible();

    let on_toggle = Callback::new(move |id: String| {
        let mut flipped = None;
        exercises.update(|s| flipped = s.toggle_completed(&id));
        if flipped.is_none() {
            leptos::logging::warn!("toggle for unknown exercise {id}");
        }
    });

    view! {
        <div class="exercise-browser">
            <div class="tab-header">
                <div>
                    <h2>"Exercise Browser"</h2>
                    <p class="muted">"Practice coding with interactive exercises"</p>
                </div>
                <div class="card summary-card">
                    <div class="summary-card__row">
                        <span>"Progress"</span>
                        <strong>
                            {move || {
                                let state = exercises.get();
                                summary_label(state.completed_count(), state.items.len())
                            }}
                        </strong>
                    </div>
                    <ProgressBar value=completion/>
                    <p class="muted small">{move || format!("{}% completed", rounded(completion.get()))}</p>
                </div>
            </div>

            <div class="filters">
                <input
                    class="filters__search"
                    type="text"
                    placeholder="Search exercises..."
                    prop:value=move || exercises.get().filter.search
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        exercises.update(|s| s.filter.search = text);
                    }
                />
                <select
                    class="filters__select"
                    prop:value=move || exercises.get().filter.difficulty
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        exercises.update(|s| s.filter.difficulty = value);
                    }
                >
                    {difficulty_options()
                        .into_iter()
                        .map(|option| view! { <option value=option>{option}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="filters__select"
                    prop:value=move || exercises.get().filter.category
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        exercises.update(|s| s.filter.category = value);
                    }
                >
                    {CATEGORIES
                        .into_iter()
                        .map(|option| view! { <option value=option>{option}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="exercise-grid">
                {move || {
                    visible()
                        .into_iter()
                        .map(|exercise| view! { <ExerciseCard exercise=exercise on_toggle=on_toggle/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || visible().is_empty()>
                <div class="card empty-state">
                    <div class="empty-state__icon">"⚲"</div>
                    <h3>"No exercises found"</h3>
                    <p class="muted">"Try adjusting your search criteria or filters"</p>
                </div>
            </Show>
        </div>
    }
}
