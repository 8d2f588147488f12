mod error;
mod grammar;
mod lexer;

pub use error::{LexError, SyntaxError};
pub use grammar::{parse, MAX_DEPTH};
pub use lexer::{Token, TokenKind, tokenize};

use crate::GenrulerError;
use crate::types::Node;

/// Tokenize and parse a source string into its syntax tree.
///
/// # Errors
///
/// Returns [`GenrulerError::Lex`] or [`GenrulerError::Syntax`] if the input is not
/// a single well-formed parenthesized form.
pub fn read(source: &str) -> Result<Node, GenrulerError> {
    let tokens = tokenize(source)?;
    tracing::trace!(tokens = tokens.len(), "tokenized rule source");
    parse(&tokens).map_err(|err| {
        tracing::debug!(offset = ?err.offset(), "rule source failed to parse");
        err.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_reports_lex_errors() {
        assert!(matches!(
            read(r#"("open)"#),
            Err(GenrulerError::Lex(LexError::UnterminatedString { offset: 1 }))
        ));
    }

    #[test]
    fn read_reports_syntax_errors() {
        assert!(matches!(
            read("boolean.tautology"),
            Err(GenrulerError::Syntax(SyntaxError::Expected { .. }))
        ));
    }

    #[test]
    fn read_is_deterministic() {
        let source = r#"(boolean.and (condition.gt (basic.field "age") 18) (boolean.tautology))"#;
        assert_eq!(read(source).unwrap(), read(source).unwrap());
    }
}
