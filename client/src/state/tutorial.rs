//! Linear tutorial walkthrough: fixed steps, a cursor, and completed marks.

#[cfg(test)]
#[path = "tutorial_test.rs"]
mod tutorial_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::util::percent::percent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Explanation,
    Code,
    Interactive,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explanation => "explanation",
            Self::Code => "code",
            Self::Interactive => "interactive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialStep {
    pub id: u32,
    pub title: String,
    /// Markdown body.
    pub content: String,
    pub code: Option<String>,
    pub kind: StepKind,
}

impl TutorialStep {
    fn new(id: u32, title: &str, content: &str, code: &str, kind: StepKind) -> Self {
        Self {
            id,
            title: title.to_owned(),
            content: content.to_owned(),
            code: Some(code.to_owned()),
            kind,
        }
    }
}

/// The built-in JavaScript fundamentals tutorial.
pub fn steps() -> Vec<TutorialStep> {
    vec![
        TutorialStep::new(
            1,
            "Introduction to Variables",
            "Variables are containers that store data values. In JavaScript, you can declare variables using `let`, `const`, or `var` keywords.",
            "let message = 'Hello, World!';\nconst pi = 3.14159;\nvar count = 0;",
            StepKind::Explanation,
        ),
        TutorialStep::new(
            2,
            "Working with Functions",
            "Functions are reusable blocks of code that perform specific tasks. They help organize your code and avoid repetition.",
            "function greetUser(name) {\n  return `Hello, ${name}!`;\n}\n\nconst result = greetUser('Alice');\nconsole.log(result);",
            StepKind::Code,
        ),
        TutorialStep::new(
            3,
            "Interactive Challenge",
            "Now it's your turn! Try creating a function that calculates the area of a rectangle.",
            "// Your task: Create a function called calculateArea\n// It should take width and height as parameters\n// Return the area (width * height)\n\nfunction calculateArea(width, height) {\n  // Write your code here\n}\n\n// Test your function\nconsole.log(calculateArea(5, 3)); // Should output: 15",
            StepKind::Interactive,
        ),
        TutorialStep::new(
            4,
            "Arrays and Loops",
            "Arrays store multiple values in a single variable. Loops help you iterate through array elements efficiently.",
            "const fruits = ['apple', 'banana', 'orange'];\n\n// Using for loop\nfor (let i = 0; i < fruits.length; i++) {\n  console.log(fruits[i]);\n}\n\n// Using forEach method\nfruits.forEach(fruit => {\n  console.log(fruit);\n});",
            StepKind::Explanation,
        ),
    ]
}

/// Cursor and completion marks over a fixed list of steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialState {
    pub steps: Vec<TutorialStep>,
    pub current: usize,
    pub completed: BTreeSet<usize>,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new(steps())
    }
}

impl TutorialState {
    pub fn new(steps: Vec<TutorialStep>) -> Self {
        Self { steps, current: 0, completed: BTreeSet::new() }
    }

    pub fn current_step(&self) -> Option<&TutorialStep> {
        self.steps.get(self.current)
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.steps.len()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Mark the current step complete and advance; no-op on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.completed.insert(self.current);
        self.current += 1;
        true
    }

    /// Step back; no-op on the first step.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn mark_complete(&mut self) {
        if self.current < self.steps.len() {
            self.completed.insert(self.current);
        }
    }

    /// Position through the tutorial: `(current + 1) / len` as a percentage.
    pub fn progress_percent(&self) -> f64 {
        percent((self.current + 1).min(self.steps.len()), self.steps.len())
    }

    /// `"Step 2 of 4"` header label.
    pub fn position_label(&self) -> String {
        format!("Step {} of {}", self.current + 1, self.steps.len())
    }
}
