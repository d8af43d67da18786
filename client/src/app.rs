//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::exercises::ExercisesState;
use crate::state::playground::PlaygroundState;
use crate::state::progress::ProgressSnapshot;
use crate::state::tutorial::TutorialState;
use crate::state::ui::UiState;
use crate::util::{draft, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let playground = RwSignal::new(PlaygroundState::default());
    let exercises = RwSignal::new(ExercisesState::default());
    let tutorial = RwSignal::new(TutorialState::default());
    let progress = RwSignal::new(ProgressSnapshot::default());

    provide_context(ui);
    provide_context(playground);
    provide_context(exercises);
    provide_context(tutorial);
    provide_context(progress);

    // Browser-only restore of theme and saved draft; effects do not run during SSR.
    Effect::new(move || {
        let restored = theme::load();
        theme::apply(restored);
        ui.update(|u| u.theme = restored);

        if let Some(saved) = draft::load_draft() {
            leptos::logging::log!("restored playground draft ({} chars)", saved.code.len());
            playground.update(|p| p.load(&saved.code));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/codemaster.css"/>
        <Title text="CodeMaster - Learn. Code. Excel."/>
        <Meta name="description" content="Interactive programming courses with a live code playground, exercises, and tutorials."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
