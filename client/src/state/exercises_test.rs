use super::*;

fn filter(search: &str, difficulty: &str, category: &str) -> ExerciseFilter {
    ExerciseFilter { search: search.to_owned(), difficulty: difficulty.to_owned(), category: category.to_owned() }
}

fn ids(exercises: &[&Exercise]) -> Vec<String> {
    exercises.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn catalog_has_four_exercises_with_valid_ratings() {
    let items = catalog();
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|e| (0.0..=5.0).contains(&e.rating)));
}

#[test]
fn default_filter_shows_everything() {
    let items = catalog();
    assert_eq!(ExerciseFilter::default().apply(&items).len(), 4);
}

#[test]
fn search_is_case_insensitive_over_title() {
    let items = catalog();
    assert_eq!(ids(&filter("BINARY", ALL, ALL).apply(&items)), vec!["4"]);
}

#[test]
fn search_matches_description_too() {
    let items = catalog();
    assert_eq!(ids(&filter("promises", ALL, ALL).apply(&items)), vec!["2"]);
}

#[test]
fn search_does_not_look_at_tags() {
    let items = catalog();
    assert!(filter("optimization", ALL, ALL).apply(&items).is_empty());
}

#[test]
fn difficulty_filter_is_exact() {
    let items = catalog();
    assert_eq!(ids(&filter("", "Intermediate", ALL).apply(&items)), vec!["2", "4"]);
}

#[test]
fn category_filter_is_exact() {
    let items = catalog();
    assert_eq!(ids(&filter("", ALL, "React").apply(&items)), vec!["3"]);
    assert!(filter("", ALL, "react").apply(&items).is_empty());
}

#[test]
fn filters_combine_with_and() {
    let items = catalog();
    assert_eq!(ids(&filter("array", "Beginner", "JavaScript").apply(&items)), vec!["1"]);
    assert!(filter("array", "Advanced", "JavaScript").apply(&items).is_empty());
}

#[test]
fn empty_category_yields_no_results() {
    let items = catalog();
    assert!(CATEGORIES.contains(&"Python"));
    assert!(filter("", ALL, "Python").apply(&items).is_empty());
}

#[test]
fn difficulty_options_start_with_all() {
    assert_eq!(difficulty_options(), vec!["All", "Beginner", "Intermediate", "Advanced"]);
}

#[test]
fn difficulty_tones() {
    assert_eq!(Difficulty::Beginner.tone(), "tone-success");
    assert_eq!(Difficulty::Intermediate.tone(), "tone-warning");
    assert_eq!(Difficulty::Advanced.tone(), "tone-destructive");
}

#[test]
fn completion_summary_counts_completed_flags() {
    let state = ExercisesState::default();
    assert_eq!(state.completed_count(), 2);
    assert!((state.completion_percent() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn toggle_completed_flips_flag_and_updates_summary() {
    let mut state = ExercisesState::default();
    assert_eq!(state.toggle_completed("2"), Some(true));
    assert_eq!(state.completed_count(), 3);
    assert_eq!(state.toggle_completed("2"), Some(false));
    assert_eq!(state.toggle_completed("missing"), None);
}

#[test]
fn visible_follows_current_filter() {
    let mut state = ExercisesState::default();
    state.filter.category = "Algorithms".to_owned();
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Algorithm: Binary Search");
}

#[test]
fn filter_deserializes_with_defaults() {
    let parsed: ExerciseFilter = serde_json::from_str(r#"{"search":"react"}"#).unwrap();
    assert_eq!(parsed.difficulty, ALL);
    assert_eq!(parsed.category, ALL);
}
