//! Landing page: hero, feature grid, tabbed learning area, call to action.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. Every interactive surface lives in one of the four
//! tabs; the header nav and hero buttons switch tabs through `UiState` so the
//! page never navigates.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::code_editor::CodeEditor;
use crate::components::exercise_browser::ExerciseBrowser;
use crate::components::header::Header;
use crate::components::progress_tracker::ProgressTracker;
use crate::components::tutorial_section::TutorialSection;
use crate::state::playground::SAMPLE_CODE;
use crate::state::progress::Tone;
use crate::state::ui::{MainTab, UiState};

pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        glyph: "</>",
        title: "Interactive Code Editor",
        description: "Write, test, and debug code with real-time analysis and suggestions",
        tone: Tone::Primary,
    },
    Feature {
        glyph: "◎",
        title: "Smart Exercises",
        description: "Practice with adaptive coding challenges that match your skill level",
        tone: Tone::Success,
    },
    Feature {
        glyph: "📖",
        title: "Step-by-Step Tutorials",
        description: "Learn programming concepts through guided interactive lessons",
        tone: Tone::Warning,
    },
    Feature {
        glyph: "🏆",
        title: "Progress Tracking",
        description: "Monitor your growth with detailed analytics and achievements",
        tone: Tone::Destructive,
    },
];

pub const FOOTER_TEXT: &str = "© 2024 CodeMaster. Empowering developers worldwide with interactive learning.";

fn panel_id(tab: MainTab) -> String {
    format!("panel-{}", tab.slug())
}

fn trigger_id(tab: MainTab) -> String {
    format!("tab-{}", tab.slug())
}

fn tab_trigger_class(tab: MainTab, active: MainTab) -> &'static str {
    if tab == active { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" }
}

fn tab_glyph(tab: MainTab) -> &'static str {
    match tab {
        MainTab::Playground => "</>",
        MainTab::Exercises => "◎",
        MainTab::Tutorials => "📖",
        MainTab::Progress => "🏆",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = move || ui.get().active_tab;
    let select = move |tab: MainTab| ui.update(|u| u.active_tab = tab);

    let on_run = Callback::new(|code: String| {
        leptos::logging::log!("Code executed: {} chars", code.len());
    });

    view! {
        <div class="page">
            <Header/>

            <section class="hero">
                <div class="hero__inner">
                    <div class="hero__badge">"✦ AI-Powered Learning Platform"</div>
                    <h1 class="hero__title">
                        "Master Programming with "
                        <span class="gradient-text">"Interactive Learning"</span>
                    </h1>
                    <p class="hero__lead">
                        "Learn to code with real-time error detection, intelligent debugging suggestions, "
                        "and personalized exercises that adapt to your skill level."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--hero btn--lg" on:click=move |_| select(MainTab::Playground)>
                            "▶ Start Coding Now"
                        </button>
                        <button class="btn btn--outline btn--lg" on:click=move |_| select(MainTab::Tutorials)>
                            "📖 Browse Tutorials"
                        </button>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="section-heading">
                    <h2>"Everything You Need to Learn Programming"</h2>
                    <p class="muted">
                        "Our comprehensive platform combines the best learning tools with AI-powered assistance"
                    </p>
                </div>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="card feature-card">
                                    <div class=format!("feature-card__icon {}", feature.tone.class())>
                                        {feature.glyph}
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p class="muted">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="learning">
                <div class="tabs__list" role="tablist">
                    {MainTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    id=trigger_id(tab)
                                    role="tab"
                                    aria-controls=panel_id(tab)
                                    aria-selected=move || (active() == tab).to_string()
                                    class=move || tab_trigger_class(tab, active())
                                    on:click=move |_| select(tab)
                                >
                                    <span aria-hidden="true">{tab_glyph(tab)}</span>
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="tabs__panel" role="tabpanel" id=move || panel_id(active())>
                    {move || match active() {
                        MainTab::Playground => {
                            view! {
                                <div class="section-heading">
                                    <h2>"Interactive Code Playground"</h2>
                                    <p class="muted">
                                        "Write code, get instant feedback, and learn from AI-powered suggestions"
                                    </p>
                                </div>
                                <CodeEditor initial_code=SAMPLE_CODE language="javascript" on_run=on_run/>
                            }
                                .into_any()
                        }
                        MainTab::Exercises => view! { <ExerciseBrowser/> }.into_any(),
                        MainTab::Tutorials => view! { <TutorialSection/> }.into_any(),
                        MainTab::Progress => view! { <ProgressTracker/> }.into_any(),
                    }}
                </div>
            </section>

            <section class="cta">
                <div class="card cta__card">
                    <h2>"Ready to Start Your Coding Journey?"</h2>
                    <p class="muted">"Join thousands of developers who are mastering programming with CodeMaster"</p>
                    <div class="hero__actions">
                        <button class="btn btn--hero btn--lg" on:click=move |_| select(MainTab::Playground)>
                            "Get Started Free →"
                        </button>
                        <button class="btn btn--outline btn--lg">"View Pricing"</button>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="brand brand--small">
                    <span class="brand__mark">"</>"</span>
                    <span class="gradient-text">"CodeMaster"</span>
                </div>
                <p class="muted">{FOOTER_TEXT}</p>
            </footer>
        </div>
    }
}
