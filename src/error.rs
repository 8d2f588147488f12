use thiserror::Error;

use crate::parse::{LexError, SyntaxError};
use crate::types::{ArgumentError, InvalidFunctionNameError, NonCallableResultError};

/// Unified error type for turning source text into a [`Rule`](crate::Rule).
///
/// Returned by [`parse_rule()`](crate::parse_rule) and friends. Errors raised while a
/// compiled rule is applied are [`EvalError`](crate::EvalError)s instead.
#[derive(Debug, Error)]
pub enum GenrulerError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    InvalidFunctionName(#[from] InvalidFunctionNameError),

    #[error(transparent)]
    NonCallableResult(#[from] NonCallableResultError),

    #[error(transparent)]
    InvalidArguments(#[from] ArgumentError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
