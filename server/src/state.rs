//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the read-only course catalog, built once at startup from the same
//! data the client renders, so API responses always match the page.

use std::sync::Arc;

use codemaster_client::state::exercises::{self, Exercise};
use codemaster_client::state::progress::ProgressSnapshot;
use codemaster_client::state::tutorial::{self, TutorialStep};

/// Immutable course data served under `/api`.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub tutorial: Vec<TutorialStep>,
    pub progress: ProgressSnapshot,
}

impl Default for Catalog {
    fn default() -> Self {
        Self { exercises: exercises::catalog(), tutorial: tutorial::steps(), progress: ProgressSnapshot::default() }
    }
}

#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}
