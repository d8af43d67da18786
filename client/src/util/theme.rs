//! Browser side of the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every color token in `codemaster.css` hangs off `html[data-theme]`. The
//! chosen `Theme` is written there and remembered in `localStorage`; a first
//! visit with nothing stored follows `prefers-color-scheme`. During SSR the
//! page renders light and the restore effect corrects it after hydration.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;
use crate::util::storage;

const THEME_KEY: &str = "codemaster_theme";

/// Decode a stored theme. Unknown values count as no choice.
pub fn parse_stored(raw: &str) -> Option<Theme> {
    match raw.trim() {
        "light" => Some(Theme::Light),
        "dark" => Some(Theme::Dark),
        _ => None,
    }
}

/// Remembered theme, else the operating system's preference.
pub fn load() -> Theme {
    storage::get(THEME_KEY)
        .as_deref()
        .and_then(parse_stored)
        .unwrap_or_else(|| if system_prefers_dark() { Theme::Dark } else { Theme::Light })
}

/// Remember `theme` for the next visit.
pub fn store(theme: Theme) {
    if !storage::set(THEME_KEY, theme.as_str()) {
        leptos::logging::warn!("theme preference was not saved");
    }
}

/// Point the stylesheet at `theme`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element());
        match root {
            Some(root) => {
                if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
                    leptos::logging::warn!("could not set data-theme: {err:?}");
                }
            }
            None => leptos::logging::warn!("no document element to theme"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
