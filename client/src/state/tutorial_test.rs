use super::*;
use crate::script::evaluate;

#[test]
fn default_tutorial_starts_at_first_step() {
    let state = TutorialState::default();
    assert_eq!(state.steps.len(), 4);
    assert_eq!(state.current, 0);
    assert!(state.completed.is_empty());
    assert_eq!(state.position_label(), "Step 1 of 4");
    assert!((state.progress_percent() - 25.0).abs() < f64::EPSILON);
}

#[test]
fn next_marks_current_complete_and_advances() {
    let mut state = TutorialState::default();
    assert!(state.next());
    assert_eq!(state.current, 1);
    assert!(state.is_completed(0));
    assert!(!state.is_completed(1));
}

#[test]
fn next_on_last_step_is_noop() {
    let mut state = TutorialState::default();
    state.go_to(3);
    assert!(!state.next());
    assert_eq!(state.current, 3);
    assert!(!state.is_completed(3));
    assert!((state.progress_percent() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn previous_on_first_step_is_noop() {
    let mut state = TutorialState::default();
    assert!(!state.previous());
    assert_eq!(state.current, 0);
}

#[test]
fn previous_does_not_unmark_completion() {
    let mut state = TutorialState::default();
    state.next();
    assert!(state.previous());
    assert_eq!(state.current, 0);
    assert!(state.is_completed(0));
}

#[test]
fn go_to_rejects_out_of_range() {
    let mut state = TutorialState::default();
    assert!(state.go_to(2));
    assert!(!state.go_to(4));
    assert_eq!(state.current, 2);
}

#[test]
fn go_to_does_not_mark_completion() {
    let mut state = TutorialState::default();
    state.go_to(2);
    assert!(state.completed.is_empty());
}

#[test]
fn mark_complete_is_idempotent() {
    let mut state = TutorialState::default();
    state.go_to(1);
    state.mark_complete();
    state.mark_complete();
    assert_eq!(state.completed.len(), 1);
    assert!(state.is_completed(1));
}

#[test]
fn empty_tutorial_is_safe() {
    let mut state = TutorialState::new(Vec::new());
    assert!(state.current_step().is_none());
    assert!(!state.next());
    state.mark_complete();
    assert!(state.completed.is_empty());
    assert_eq!(state.progress_percent(), 0.0);
}

#[test]
fn only_third_step_is_interactive() {
    let kinds: Vec<_> = steps().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![StepKind::Explanation, StepKind::Code, StepKind::Interactive, StepKind::Explanation]
    );
}

#[test]
fn step_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&StepKind::Interactive).unwrap(), "\"interactive\"");
}

#[test]
fn every_code_sample_runs_in_the_playground() {
    for step in steps() {
        let code = step.code.expect("all built-in steps carry code");
        assert!(evaluate(&code).is_ok(), "step {} failed to run", step.id);
    }
}
