//! Read-only code block with pattern-based syntax highlighting.

use leptos::prelude::*;

use crate::util::highlight::highlight;

/// Render `code` as classed spans inside `<pre><code>`.
///
/// Spans are emitted as text nodes, so source containing markup is shown
/// literally rather than injected.
#[component]
pub fn HighlightedCode(#[prop(into)] code: Signal<String>, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <pre class=format!("code-block {class}")>
            <code>
                {move || {
                    highlight(&code.get())
                        .into_iter()
                        .map(|span| view! { <span class=span.kind.class()>{span.text}</span> })
                        .collect::<Vec<_>>()
                }}
            </code>
        </pre>
    }
}
