//! Thin horizontal progress bar shared by every tab.

use leptos::prelude::*;

use crate::util::percent::bar_width_style;

/// Filled bar for a percentage in 0..=100; out-of-range values are clamped.
#[component]
pub fn ProgressBar(#[prop(into)] value: Signal<f64>, #[prop(optional)] tone: Option<&'static str>) -> impl IntoView {
    let track_class = match tone {
        Some(tone) => format!("progress {tone}"),
        None => "progress".to_owned(),
    };
    view! {
        <div class=track_class role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=move || value.get().round().to_string()>
            <div class="progress__fill" style=move || bar_width_style(value.get())></div>
        </div>
    }
}
