use super::*;

#[test]
fn evaluate_reports_console_and_completion_value() {
    let evaluation = evaluate("console.log('hi'); 40 + 2").unwrap();
    assert_eq!(evaluation.console, vec!["hi".to_owned()]);
    assert_eq!(evaluation.value, "42");
    assert_eq!(evaluation.render(), "hi\n42");
}

#[test]
fn render_without_console_output_is_just_the_value() {
    let evaluation = evaluate("'done'").unwrap();
    assert_eq!(evaluation.render(), "done");
}

#[test]
fn evaluate_surfaces_syntax_errors() {
    let err = evaluate("let = 5").unwrap_err();
    assert!(matches!(err, EvalError::Syntax { line: 1, column: 5, .. }));
}

#[test]
fn evaluate_with_budget_stops_runaway_loops() {
    let err = evaluate_with_budget("for (;;) {}", 100).unwrap_err();
    assert_eq!(err, EvalError::BudgetExhausted(100));
    assert_eq!(err.to_string(), "execution stopped after 100 steps (possible infinite loop)");
}

#[test]
fn interactive_challenge_template_runs_before_it_is_solved() {
    let source = "// Your task: Create a function called calculateArea\nfunction calculateArea(width, height) {\n  // Write your code here\n}\n\nconsole.log(calculateArea(5, 3));";
    let evaluation = evaluate(source).unwrap();
    assert_eq!(evaluation.console, vec!["undefined".to_owned()]);
}

#[test]
fn interactive_challenge_solution_prints_area() {
    let source = "function calculateArea(width, height) {\n  return width * height;\n}\nconsole.log(calculateArea(5, 3));";
    assert_eq!(evaluate(source).unwrap().console, vec!["15".to_owned()]);
}
