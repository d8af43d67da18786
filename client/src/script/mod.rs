//! In-page evaluator for the code playground.
//!
//! ARCHITECTURE
//! ============
//! `lexer` -> `parser` -> `interpreter`. Source is a small JavaScript-like
//! language: enough for the sample programs and tutorial snippets (functions,
//! closures, loops, arrays, template strings, `console.log`). Nothing here
//! touches the browser, so the whole pipeline is exercised by native tests.

pub mod ast;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod value;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub use error::EvalError;

use interpreter::Interpreter;

/// Outcome of a successful run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Lines captured from `console.log` and friends, in order.
    pub console: Vec<String>,
    /// The program's completion value, stringified like `String(value)`.
    pub value: String,
}

impl Evaluation {
    /// Text for the output pane: console lines followed by the completion value.
    pub fn render(&self) -> String {
        let mut lines = self.console.clone();
        lines.push(self.value.clone());
        lines.join("\n")
    }
}

/// Parse and run `source` with the default step budget.
///
/// # Errors
///
/// Returns the syntax or runtime error that stopped evaluation.
pub fn evaluate(source: &str) -> Result<Evaluation, EvalError> {
    evaluate_with_budget(source, interpreter::DEFAULT_STEP_BUDGET)
}

/// Parse and run `source`, stopping after `budget` statements and calls.
///
/// # Errors
///
/// Returns the syntax or runtime error that stopped evaluation, including
/// `EvalError::BudgetExhausted` when the budget runs out.
pub fn evaluate_with_budget(source: &str, budget: u64) -> Result<Evaluation, EvalError> {
    let program = parser::parse_program(source)?;
    let mut interpreter = Interpreter::with_budget(budget);
    let value = interpreter.run(&program)?;
    Ok(Evaluation { value: value.to_js_string(), console: interpreter.into_console() })
}
