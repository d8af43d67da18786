//! Code playground panel: editor, highlighted preview, output, and hints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Editor text lives in the shared `PlaygroundState` context so the tutorial's
//! "Try it" button can load code here and switch tabs.
//!
//! DESIGN
//! ======
//! Run is two-phase. The click calls `begin_run` (disabling the button), then
//! a local task sleeps `RUN_DELAY_MS` before evaluating and calling
//! `finish_run`. There is no cancellation; the disabled button is the only
//! guard against overlapping runs. Without `hydrate` the run completes
//! immediately, which keeps SSR and native tests free of timers.

use leptos::prelude::*;

use crate::components::highlighted_code::HighlightedCode;
use crate::state::playground::{ANALYSIS_HINTS, HintTone, PlaygroundState, run_source};
use crate::util::draft::{self, PlaygroundDraft};

/// Interactive code editor bound to the shared playground state.
#[component]
pub fn CodeEditor(
    #[prop(default = "")] initial_code: &'static str,
    #[prop(default = "javascript")] language: &'static str,
    #[prop(optional)] on_run: Option<Callback<String>>,
) -> impl IntoView {
    let playground = expect_context::<RwSignal<PlaygroundState>>();
    let saved = RwSignal::new(false);

    if playground.with_untracked(|p| p.initial_code != initial_code) {
        playground.set(PlaygroundState::new(initial_code));
    }

    let running = move || playground.get().running;

    let on_run_click = move |_| {
        let mut started = false;
        playground.update(|p| started = p.begin_run());
        if !started {
            return;
        }
        let code = playground.with_untracked(|p| p.code.clone());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::playground::RUN_DELAY_MS;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(RUN_DELAY_MS))).await;
                complete_run(playground, language, code, on_run);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        complete_run(playground, language, code, on_run);
    };

    let on_reset = move |_| {
        playground.update(PlaygroundState::reset);
        draft::clear_draft();
        saved.set(false);
    };

    let on_save = move |_| {
        let code = playground.with_untracked(|p| p.code.clone());
        draft::save_draft(&PlaygroundDraft { language: language.to_owned(), code });
        saved.set(true);
    };

    view! {
        <div class="editor">
            <div class="editor__toolbar">
                <h3>"Code Editor"</h3>
                <div class="editor__actions">
                    <button class="btn btn--outline btn--sm" title="Reset" on:click=on_reset>
                        "↺"
                    </button>
                    <button class="btn btn--code btn--sm" title="Save draft" on:click=on_save>
                        {move || if saved.get() { "Saved" } else { "Save" }}
                    </button>
                    <button class="btn btn--success btn--sm" disabled=running on:click=on_run_click>
                        "▶ "
                        {move || if running() { "Running..." } else { "Run" }}
                    </button>
                </div>
            </div>

            <div class="editor__grid">
                <div class="card editor__pane">
                    <div class="pane-label">
                        <span class="dot tone-success"></span>
                        {language.to_uppercase()}
                    </div>
                    <textarea
                        class="editor__input"
                        spellcheck="false"
                        placeholder="Write your code here..."
                        prop:value=move || playground.get().code
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            playground.update(|p| p.code = text);
                            saved.set(false);
                        }
                    ></textarea>
                    <div class="pane-label">
                        <span class="dot tone-primary"></span>
                        "Preview"
                    </div>
                    <HighlightedCode code=Signal::derive(move || playground.get().code) class="editor__preview"/>
                </div>

                <div class="card editor__pane">
                    <div class="pane-label">
                        <span class="dot tone-primary"></span>
                        "Output"
                    </div>
                    <pre class="editor__output">{move || playground.get().output_text().to_owned()}</pre>

                    <Show when=move || !playground.get().errors.is_empty()>
                        <div class="editor__errors">
                            <div class="pane-label tone-destructive">"✕ Errors Detected"</div>
                            {move || {
                                playground
                                    .get()
                                    .errors
                                    .into_iter()
                                    .map(|error| view! { <div class="error-item">{error}</div> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>

                    <div class="editor__hints">
                        <div class="pane-label">"⚠ Analysis & Suggestions"</div>
                        {ANALYSIS_HINTS
                            .into_iter()
                            .map(|(tone, message)| {
                                view! {
                                    <div class=format!("hint {}", tone.class())>
                                        {hint_glyph(tone)}
                                        " "
                                        {message}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}

fn hint_glyph(tone: HintTone) -> &'static str {
    match tone {
        HintTone::Warning => "⚠",
        HintTone::Success | HintTone::Primary => "✓",
    }
}

/// Evaluate, publish the result, and notify `on_run` after a clean run.
fn complete_run(playground: RwSignal<PlaygroundState>, language: &str, code: String, on_run: Option<Callback<String>>) {
    let outcome = run_source(language, &code);
    let succeeded = matches!(outcome, Some(Ok(_)));
    if let Some(Err(err)) = &outcome {
        leptos::logging::warn!("playground run failed: {err}");
    }
    playground.update(|p| p.finish_run(outcome));
    if succeeded {
        if let Some(on_run) = on_run {
            on_run.run(code);
        }
    }
}
