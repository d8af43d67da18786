use super::*;

fn filter(search: &str, difficulty: &str, category: &str) -> Query<ExerciseFilter> {
    Query(ExerciseFilter { search: search.to_owned(), difficulty: difficulty.to_owned(), category: category.to_owned() })
}

#[tokio::test]
async fn list_exercises_without_filters_returns_catalog() {
    let Json(items) = list_exercises(State(AppState::default()), Query(ExerciseFilter::default())).await;
    assert_eq!(items.len(), 4);
}

#[tokio::test]
async fn list_exercises_applies_browser_filter() {
    let Json(items) = list_exercises(State(AppState::default()), filter("search", "Intermediate", "All")).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Algorithm: Binary Search");
}

#[tokio::test]
async fn list_exercises_unknown_category_is_empty() {
    let Json(items) = list_exercises(State(AppState::default()), filter("", "All", "Rust")).await;
    assert!(items.is_empty());
}

#[test]
fn query_string_defaults_missing_fields() {
    let uri: axum::http::Uri = "/api/exercises?category=React".parse().unwrap();
    let Query(parsed) = Query::<ExerciseFilter>::try_from_uri(&uri).unwrap();
    assert_eq!(parsed.category, "React");
    assert_eq!(parsed.difficulty, "All");
    assert!(parsed.search.is_empty());
}

#[tokio::test]
async fn tutorial_returns_four_steps_in_order() {
    let Json(steps) = tutorial(State(AppState::default())).await;
    let ids: Vec<u32> = steps.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn progress_report_includes_derived_figures() {
    let Json(report) = progress(State(AppState::default())).await;
    assert_eq!(report.points_to_next_level, 350);
    assert_eq!(report.level_progress, 0.0);
    assert_eq!(report.activity_heights.len(), 7);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["stats"]["total_points"], 2450);
    assert_eq!(json["skills"].as_array().map(Vec::len), Some(4));
    assert!(json["exercise_completion"].as_f64().is_some());
}
