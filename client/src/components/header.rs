//! Sticky site header with brand, tab navigation, and theme toggle.

use leptos::prelude::*;

use crate::state::ui::{MainTab, UiState};
use crate::util::theme;

/// Nav order in the header differs from the tab bar.
const NAV: [(MainTab, &str, &str); 4] = [
    (MainTab::Tutorials, "📖", "Tutorials"),
    (MainTab::Exercises, "◎", "Exercises"),
    (MainTab::Playground, "</>", "Playground"),
    (MainTab::Progress, "🏆", "Progress"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_theme = move |_| {
        let next = ui.with_untracked(|u| u.theme.toggled());
        theme::apply(next);
        theme::store(next);
        ui.update(|u| u.theme = next);
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="brand">
                    <span class="brand__mark">"</>"</span>
                    <div>
                        <h1 class="brand__name gradient-text">"CodeMaster"</h1>
                        <p class="brand__tagline">"Learn. Code. Excel."</p>
                    </div>
                </div>

                <nav class="site-header__nav">
                    {NAV
                        .into_iter()
                        .map(|(tab, glyph, label)| {
                            view! {
                                <button
                                    class="btn btn--ghost btn--sm"
                                    class:btn--current=move || ui.get().active_tab == tab
                                    on:click=move |_| ui.update(|u| u.active_tab = tab)
                                >
                                    <span aria-hidden="true">{glyph}</span>
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="site-header__actions">
                    <button
                        class="btn btn--outline btn--sm"
                        on:click=on_theme
                        title=move || ui.get().theme.toggle_label()
                    >
                        {move || ui.get().theme.toggle_glyph()}
                    </button>
                    <button class="btn btn--hero btn--sm" on:click=move |_| ui.update(|u| u.active_tab = MainTab::Playground)>
                        "Get Started"
                    </button>
                </div>
            </div>
        </header>
    }
}
