//! Code playground state: editor text, output pane, and run lifecycle.
//!
//! DESIGN
//! ======
//! A run is split into `begin_run` (button press) and `finish_run` (after the
//! simulated processing delay) so the component owns the timer while the
//! transitions stay testable without a browser.

#[cfg(test)]
#[path = "playground_test.rs"]
mod playground_test;

use crate::script::{self, EvalError, Evaluation};

/// Delay before a run's result is shown, simulating processing.
pub const RUN_DELAY_MS: u32 = 1000;

pub const OUTPUT_PLACEHOLDER: &str = "Run your code to see output...";
pub const ERROR_OUTPUT: &str = "Error occurred during execution";

pub const SAMPLE_CODE: &str = "// Welcome to CodeMaster! \n// Try this sample function:\n\nfunction fibonacci(n) {\n  if (n <= 1) return n;\n  return fibonacci(n - 1) + fibonacci(n - 2);\n}\n\nconsole.log(fibonacci(8)); // What will this output?";

/// Fixed hints shown under the output pane.
pub const ANALYSIS_HINTS: [(HintTone, &str); 3] = [
    (HintTone::Success, "Syntax is valid"),
    (HintTone::Warning, "Consider adding error handling"),
    (HintTone::Primary, "Code follows best practices"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintTone {
    Success,
    Warning,
    Primary,
}

impl HintTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "tone-success",
            Self::Warning => "tone-warning",
            Self::Primary => "tone-primary",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaygroundState {
    pub initial_code: String,
    pub code: String,
    pub output: String,
    pub errors: Vec<String>,
    pub running: bool,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self::new(SAMPLE_CODE)
    }
}

impl PlaygroundState {
    pub fn new(initial_code: &str) -> Self {
        Self {
            initial_code: initial_code.to_owned(),
            code: initial_code.to_owned(),
            output: String::new(),
            errors: Vec::new(),
            running: false,
        }
    }

    /// Start a run. Returns `false` if one is already in flight.
    pub fn begin_run(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.errors.clear();
        true
    }

    /// Apply the result of a finished run and clear the running flag.
    ///
    /// `None` means the language is not evaluated; output is left as is.
    pub fn finish_run(&mut self, outcome: Option<Result<Evaluation, EvalError>>) {
        match outcome {
            Some(Ok(evaluation)) => self.output = evaluation.render(),
            Some(Err(err)) => {
                self.errors = vec![err.to_string()];
                self.output = ERROR_OUTPUT.to_owned();
            }
            None => {}
        }
        self.running = false;
    }

    /// Restore the initial text and clear output and errors.
    pub fn reset(&mut self) {
        self.code.clone_from(&self.initial_code);
        self.output.clear();
        self.errors.clear();
    }

    /// Replace the editor text, e.g. from a tutorial's "Try it" button.
    pub fn load(&mut self, code: &str) {
        code.clone_into(&mut self.code);
        self.output.clear();
        self.errors.clear();
    }

    /// Text for the output pane.
    pub fn output_text(&self) -> &str {
        if self.output.is_empty() { OUTPUT_PLACEHOLDER } else { &self.output }
    }
}

/// Evaluate `code` if `language` is one the playground can run.
pub fn run_source(language: &str, code: &str) -> Option<Result<Evaluation, EvalError>> {
    language.eq_ignore_ascii_case("javascript").then(|| script::evaluate(code))
}
