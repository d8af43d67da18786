//! Card for one exercise in the browser grid.

use leptos::prelude::*;

use crate::state::exercises::Exercise;

/// Label of the card's action button.
pub fn action_label(completed: bool) -> &'static str {
    if completed { "Review" } else { "Start" }
}

/// One exercise: difficulty badge, rating, description, tags, and Start/Review.
#[component]
pub fn ExerciseCard(exercise: Exercise, on_toggle: Callback<String>) -> impl IntoView {
    let Exercise { id, title, description, difficulty, duration, rating, completed, tags, .. } = exercise;
    let button_class = if completed { "btn btn--success btn--sm" } else { "btn btn--primary btn--sm" };

    view! {
        <div class="card exercise-card" class:exercise-card--done=completed>
            <div class="exercise-card__head">
                <div>
                    <div class="exercise-card__badges">
                        <span class=format!("badge badge--outline {}", difficulty.tone())>{difficulty.as_str()}</span>
                        <Show when=move || completed>
                            <span class="tone-success" title="Completed">"✓"</span>
                        </Show>
                    </div>
                    <h3 class="exercise-card__title">{title}</h3>
                </div>
                <div class="exercise-card__rating">
                    <span class="tone-warning">"★"</span>
                    {format!("{rating:.1}")}
                </div>
            </div>

            <p class="muted exercise-card__description">{description}</p>

            <div class="exercise-card__tags">
                {tags.into_iter().map(|tag| view! { <span class="badge badge--secondary">{tag}</span> }).collect::<Vec<_>>()}
            </div>

            <div class="exercise-card__foot">
                <span class="muted">"⏱ " {duration}</span>
                <button class=button_class on:click=move |_| on_toggle.run(id.clone())>
                    "▶ "
                    {action_label(completed)}
                </button>
            </div>
        </div>
    }
}
