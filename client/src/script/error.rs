//! Error taxonomy for playground evaluation.
//!
//! `Display` output is what the playground shows in its error list, so the
//! messages follow the `Kind: message` shape learners see in browser consoles.

/// Failure raised while lexing, parsing, or running playground source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("SyntaxError: {message} (line {line}, column {column})")]
    Syntax { message: String, line: usize, column: usize },
    #[error("SyntaxError: Identifier '{0}' has already been declared")]
    Redeclared(String),
    #[error("ReferenceError: {0} is not defined")]
    Reference(String),
    #[error("TypeError: {0}")]
    Type(String),
    #[error("RangeError: {0}")]
    Range(String),
    #[error("execution stopped after {0} steps (possible infinite loop)")]
    BudgetExhausted(u64),
}

impl EvalError {
    pub(crate) fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Syntax { message: message.into(), line, column }
    }
}
