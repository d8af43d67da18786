//! Read-only course catalog routes.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Serialize;

use codemaster_client::state::exercises::{Exercise, ExerciseFilter};
use codemaster_client::state::progress::ProgressSnapshot;
use codemaster_client::state::tutorial::TutorialStep;

use crate::state::AppState;

/// Progress snapshot plus the figures the dashboard derives from it.
#[derive(Debug, Serialize)]
pub struct ProgressReport {
    #[serde(flatten)]
    pub snapshot: ProgressSnapshot,
    pub exercise_completion: f64,
    pub tutorial_completion: f64,
    pub level_progress: f64,
    pub points_to_next_level: u32,
    pub activity_heights: Vec<f64>,
}

impl From<&ProgressSnapshot> for ProgressReport {
    fn from(snapshot: &ProgressSnapshot) -> Self {
        let stats = &snapshot.stats;
        Self {
            exercise_completion: stats.exercise_completion(),
            tutorial_completion: stats.tutorial_completion(),
            level_progress: stats.level_progress(),
            points_to_next_level: stats.points_to_next_level(),
            activity_heights: snapshot.activity_heights(),
            snapshot: snapshot.clone(),
        }
    }
}

/// `GET /api/exercises?search=&difficulty=&category=`: filtered exercise list.
///
/// Missing parameters mean "All"; unknown difficulty or category values match
/// nothing, as in the browser dropdowns.
pub async fn list_exercises(
    State(state): State<AppState>,
    Query(filter): Query<ExerciseFilter>,
) -> Json<Vec<Exercise>> {
    let matched: Vec<Exercise> = filter.apply(&state.catalog.exercises).into_iter().cloned().collect();
    tracing::debug!(search = %filter.search, difficulty = %filter.difficulty, category = %filter.category, count = matched.len(), "exercise query");
    Json(matched)
}

/// `GET /api/tutorial`: tutorial steps in order.
pub async fn tutorial(State(state): State<AppState>) -> Json<Vec<TutorialStep>> {
    Json(state.catalog.tutorial.clone())
}

/// `GET /api/progress`: dashboard data with derived percentages.
pub async fn progress(State(state): State<AppState>) -> Json<ProgressReport> {
    Json(ProgressReport::from(&state.catalog.progress))
}
