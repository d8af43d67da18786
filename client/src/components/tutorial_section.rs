//! Tutorial tab: current step card, navigation, and the step overview grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation state lives in the `TutorialState` context so it survives tab
//! switches. "Try it" on interactive steps copies the sample into the
//! playground context and flips `UiState` to the playground tab.

#[cfg(test)]
#[path = "tutorial_section_test.rs"]
mod tutorial_section_test;

use leptos::prelude::*;

use crate::components::highlighted_code::HighlightedCode;
use crate::components::progress_bar::ProgressBar;
use crate::state::playground::PlaygroundState;
use crate::state::tutorial::{StepKind, TutorialState};
use crate::state::ui::{MainTab, UiState};
use crate::util::markdown::render_markdown_html;
use crate::util::percent::rounded;

/// Classes for a step card in the overview grid.
pub fn step_card_class(is_current: bool, is_completed: bool) -> String {
    let mut class = String::from("card step-card");
    if is_current {
        class.push_str(" step-card--current");
    }
    if is_completed {
        class.push_str(" step-card--done");
    }
    class
}

/// Marker inside the step bubble: a check once completed, else the step id.
pub fn step_marker(id: u32, is_completed: bool) -> String {
    if is_completed { "✓".to_owned() } else { id.to_string() }
}

#[component]
pub fn TutorialSection() -> impl IntoView {
    let tutorial = expect_context::<RwSignal<TutorialState>>();
    let playground = expect_context::<RwSignal<PlaygroundState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let progress = Signal::derive(move || tutorial.get().progress_percent());
    let step = move || tutorial.get().current_step().cloned();
    let current_done = move || {
        let state = tutorial.get();
        state.is_completed(state.current)
    };

    let on_try = move |_| {
        let Some(code) = tutorial.with_untracked(|t| t.current_step().and_then(|s| s.code.clone())) else {
            return;
        };
        playground.update(|p| p.load(&code));
        ui.update(|u| u.active_tab = MainTab::Playground);
    };

    view! {
        <div class="tutorial">
            <div class="tab-header">
                <div>
                    <h2>"Interactive Tutorial"</h2>
                    <p class="muted">"Step-by-step coding lessons"</p>
                </div>
                <span class="tutorial__position">"📖 " {move || tutorial.get().position_label()}</span>
            </div>

            <div class="card tutorial__step">
                <div class="tutorial__step-head">
                    <div>
                        <h3>{move || step().map(|s| s.title).unwrap_or_default()}</h3>
                        <div class="tutorial__progress">
                            <ProgressBar value=progress/>
                            <span class="muted small">{move || format!("{}% complete", rounded(progress.get()))}</span>
                        </div>
                    </div>
                    <Show when=current_done>
                        <span class="tone-success">"✓ Completed"</span>
                    </Show>
                </div>

                <div
                    class="prose"
                    inner_html=move || step().map(|s| render_markdown_html(&s.content)).unwrap_or_default()
                ></div>

                {move || {
                    step()
                        .and_then(|s| s.code.map(|code| (code, s.kind)))
                        .map(|(code, kind)| {
                            view! {
                                <div class="card code-sample">
                                    <div class="code-sample__head">
                                        <span class="tone-primary">"</>"</span>
                                        <span>"Code Example"</span>
                                        <Show when=move || kind == StepKind::Interactive>
                                            <button class="btn btn--code btn--sm code-sample__try" on:click=on_try>
                                                "▷ Try it"
                                            </button>
                                        </Show>
                                    </div>
                                    <HighlightedCode code=Signal::derive(move || code.clone())/>
                                </div>
                            }
                        })
                }}

                <Show when=move || step().is_some_and(|s| s.kind == StepKind::Interactive)>
                    <div class="challenge tone-warning">
                        <div class="challenge__title">"▷ Interactive Challenge"</div>
                        <p class="muted small">
                            "Complete the code above to solve this challenge. Test your solution and move to the next step."
                        </p>
                    </div>
                </Show>

                <div class="tutorial__nav">
                    <button
                        class="btn btn--outline"
                        disabled=move || tutorial.get().is_first()
                        on:click=move |_| {
                            tutorial.update(|t| {
                                t.previous();
                            });
                        }
                    >
                        "‹ Previous"
                    </button>
                    <div class="tutorial__nav-right">
                        <Show when=move || !current_done()>
                            <button class="btn btn--success" on:click=move |_| tutorial.update(TutorialState::mark_complete)>
                                "✓ Mark Complete"
                            </button>
                        </Show>
                        <button
                            class="btn btn--primary"
                            disabled=move || tutorial.get().is_last()
                            on:click=move |_| {
                                tutorial.update(|t| {
                                    t.next();
                                });
                            }
                        >
                            "Next ›"
                        </button>
                    </div>
                </div>
            </div>

            <div class="step-grid">
                {move || {
                    let state = tutorial.get();
                    state
                        .steps
                        .iter()
                        .enumerate()
                        .map(|(index, s)| {
                            let done = state.is_completed(index);
                            let class = step_card_class(index == state.current, done);
                            view! {
                                <div
                                    class=class
                                    on:click=move |_| {
                                        tutorial.update(|t| {
                                            t.go_to(index);
                                        });
                                    }
                                >
                                    <span class="step-card__marker">{step_marker(s.id, done)}</span>
                                    <div class="step-card__text">
                                        <p class="step-card__title">{s.title.clone()}</p>
                                        <p class="muted small capitalize">{s.kind.as_str()}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
