use thiserror::Error;

use super::value::{Key, Value};

/// A symbol could not be resolved to a function.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidFunctionNameError {
    #[error("Invalid function name '{name}': must be in format 'module.function'")]
    Malformed { name: String },

    #[error("Invalid function name '{name}': unknown module '{namespace}'")]
    UnknownNamespace { name: String, namespace: String },

    #[error("Invalid function name '{name}': module '{namespace}' has no function '{function}'")]
    UnknownFunction {
        name: String,
        namespace: String,
        function: String,
    },
}

impl InvalidFunctionNameError {
    /// The symbol as written in the source.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Malformed { name }
            | Self::UnknownNamespace { name, .. }
            | Self::UnknownFunction { name, .. } => name,
        }
    }
}

/// The top-level form reduced to something other than a rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Parse result must be callable, got {type_name}")]
pub struct NonCallableResultError {
    pub type_name: &'static str,
}

/// A rule builder rejected its arguments while the rule was being compiled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{function} expects {expected} argument(s), got {got}")]
    Arity {
        function: String,
        expected: String,
        got: usize,
    },

    #[error("{function} cannot accept sub-rules")]
    SubRule { function: String },

    #[error("{function}: {reason}")]
    Invalid { function: String, reason: String },
}

/// Errors raised while a rule is applied to a context.
///
/// The compiler never produces these; they come from the rule functions themselves
/// and reach the caller of [`Rule::apply`](super::Rule::apply) unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("missing key {key}")]
    MissingKey { key: Key },

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("type error in {operation}: expected {expected}, got {found}")]
    Type {
        operation: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("cannot compare {left} with {right} in {operation}")]
    Incomparable {
        operation: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("{0}")]
    Custom(String),
}

impl EvalError {
    pub(crate) fn type_mismatch(
        operation: impl Into<String>,
        expected: &'static str,
        found: &Value,
    ) -> Self {
        EvalError::Type {
            operation: operation.into(),
            expected,
            found: found.type_name(),
        }
    }

    /// An error raised by a user-supplied rule.
    pub fn custom(message: impl Into<String>) -> Self {
        EvalError::Custom(message.into())
    }
}
