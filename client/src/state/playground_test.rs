use super::*;

#[test]
fn default_state_holds_sample_program() {
    let state = PlaygroundState::default();
    assert_eq!(state.code, SAMPLE_CODE);
    assert_eq!(state.initial_code, SAMPLE_CODE);
    assert!(!state.running);
    assert_eq!(state.output_text(), OUTPUT_PLACEHOLDER);
}

#[test]
fn begin_run_sets_running_and_clears_errors() {
    let mut state = PlaygroundState::new("1");
    state.errors.push("old".to_owned());
    assert!(state.begin_run());
    assert!(state.running);
    assert!(state.errors.is_empty());
}

#[test]
fn begin_run_refuses_while_running() {
    let mut state = PlaygroundState::new("1");
    assert!(state.begin_run());
    assert!(!state.begin_run());
}

#[test]
fn finish_run_success_shows_console_then_value() {
    let mut state = PlaygroundState::default();
    state.begin_run();
    let outcome = run_source("javascript", &state.code);
    state.finish_run(outcome);
    assert!(!state.running);
    assert!(state.errors.is_empty());
    assert_eq!(state.output, "21\nundefined");
}

#[test]
fn finish_run_failure_records_single_error() {
    let mut state = PlaygroundState::new("nope()");
    state.begin_run();
    let outcome = run_source("javascript", &state.code);
    state.finish_run(outcome);
    assert_eq!(state.errors, vec!["ReferenceError: nope is not defined".to_owned()]);
    assert_eq!(state.output_text(), ERROR_OUTPUT);
    assert!(!state.running);
}

#[test]
fn unsupported_language_leaves_output_untouched() {
    let mut state = PlaygroundState::new("print('hi')");
    state.output = "previous".to_owned();
    state.begin_run();
    let outcome = run_source("python", &state.code);
    assert!(outcome.is_none());
    state.finish_run(outcome);
    assert_eq!(state.output, "previous");
    assert!(!state.running);
}

#[test]
fn run_source_language_match_is_case_insensitive() {
    assert!(run_source("JavaScript", "1").is_some());
}

#[test]
fn reset_restores_initial_code_and_clears_panes() {
    let mut state = PlaygroundState::new("let a = 1;");
    state.code = "edited".to_owned();
    state.output = "out".to_owned();
    state.errors.push("err".to_owned());
    state.reset();
    assert_eq!(state.code, "let a = 1;");
    assert!(state.output.is_empty());
    assert!(state.errors.is_empty());
}

#[test]
fn load_replaces_code_but_keeps_reset_target() {
    let mut state = PlaygroundState::default();
    state.output = "old".to_owned();
    state.load("console.log(1)");
    assert_eq!(state.code, "console.log(1)");
    assert!(state.output.is_empty());
    state.reset();
    assert_eq!(state.code, SAMPLE_CODE);
}

#[test]
fn analysis_hints_have_three_tones() {
    let tones: Vec<_> = ANALYSIS_HINTS.iter().map(|(tone, _)| tone.class()).collect();
    assert_eq!(tones, vec!["tone-success", "tone-warning", "tone-primary"]);
}
