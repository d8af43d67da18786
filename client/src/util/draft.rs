//! Browser-local persistence for the playground draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Save" in the playground has no backend: the editor contents and selected
//! language are written to `localStorage` and restored on the next visit.
//! Outside the browser every call is a no-op so SSR stays deterministic.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

const DRAFT_KEY: &str = "codemaster_playground_draft";

/// What the playground persists between visits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaygroundDraft {
    pub language: String,
    pub code: String,
}

/// Decode a stored draft; anything malformed or code-less is ignored.
pub fn parse_draft(raw: &str) -> Option<PlaygroundDraft> {
    let draft: PlaygroundDraft = serde_json::from_str(raw).ok()?;
    if draft.code.trim().is_empty() {
        return None;
    }
    Some(draft)
}

pub fn load_draft() -> Option<PlaygroundDraft> {
    storage::get(DRAFT_KEY).as_deref().and_then(parse_draft)
}

pub fn save_draft(draft: &PlaygroundDraft) {
    let raw = match serde_json::to_string(draft) {
        Ok(raw) => raw,
        Err(err) => {
            leptos::logging::warn!("playground draft could not be serialized: {err}");
            return;
        }
    };
    if !storage::set(DRAFT_KEY, &raw) {
        leptos::logging::warn!("playground draft was not saved (storage unavailable)");
    }
}

pub fn clear_draft() {
    storage::remove(DRAFT_KEY);
}
