use thiserror::Error;

/// Errors produced while splitting source text into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("parse error: unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("parse error: unexpected character {ch:?} at offset {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },
}

/// Structural errors produced while building the syntax tree.
///
/// Every variant carries the byte offset of the offending token in the source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("parse error: empty input, expected '('")]
    EmptyInput,

    #[error("parse error: expected {expected}, found '{found}' at offset {offset}")]
    Expected {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("parse error: unexpected end of input at offset {offset}, expected ')'")]
    UnexpectedEnd { offset: usize },

    #[error("parse error: unexpected trailing '{found}' at offset {offset}")]
    TrailingInput { found: String, offset: usize },

    #[error("parse error: invalid number '{text}' at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("parse error: lists nested deeper than {limit} at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },
}

impl SyntaxError {
    /// Byte offset of the offending token, if there is one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            SyntaxError::EmptyInput => None,
            SyntaxError::Expected { offset, .. }
            | SyntaxError::UnexpectedEnd { offset }
            | SyntaxError::TrailingInput { offset, .. }
            | SyntaxError::InvalidNumber { offset, .. }
            | SyntaxError::NestingTooDeep { offset, .. } => Some(*offset),
        }
    }
}
