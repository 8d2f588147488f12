use crate::types::{Node, Number, Symbol};

use super::error::SyntaxError;
use super::lexer::{Token, TokenKind};

/// Deepest list nesting accepted by [`parse`], counting the top-level form.
///
/// Parsing, evaluation and dropping of the tree all recurse per level.
pub const MAX_DEPTH: usize = 256;

/// Cursor over a token slice.
struct TokenStream<'t, 'src> {
    tokens: &'t [Token<'src>],
    position: usize,
}

impl<'t, 'src> TokenStream<'t, 'src> {
    fn new(tokens: &'t [Token<'src>]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn next(&mut self) -> Option<&'t Token<'src>> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    fn peek(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.position)
    }

    /// Offset just past the last token, reported when input runs out.
    fn end_offset(&self) -> usize {
        self.tokens.last().map_or(0, Token::end)
    }
}

// -- Grammar ----------------------------------------------------------------
//
// toplevel := '(' expr* ')'
// expr     := atom | '(' expr* ')'
// atom     := NUMBER | STRING | SYMBOL

/// Build the syntax tree for a complete token stream.
///
/// The whole stream must be exactly one parenthesized form; the result is always a
/// [`Node::List`].
///
/// # Errors
///
/// Returns [`SyntaxError`] for empty input, a bare atom at the top level,
/// unbalanced parentheses, trailing tokens, an out-of-range integer, or lists
/// nested deeper than [`MAX_DEPTH`].
pub fn parse(tokens: &[Token<'_>]) -> Result<Node, SyntaxError> {
    let mut stream = TokenStream::new(tokens);

    let open = stream.next().ok_or(SyntaxError::EmptyInput)?;
    if open.kind != TokenKind::LParen {
        return Err(SyntaxError::Expected {
            expected: "'('",
            found: open.text.to_owned(),
            offset: open.offset,
        });
    }
    let items = list_body(&mut stream, 1)?;

    if let Some(trailing) = stream.peek() {
        return Err(SyntaxError::TrailingInput {
            found: trailing.text.to_owned(),
            offset: trailing.offset,
        });
    }

    Ok(Node::List(items))
}

/// Parse expressions up to and including the closing paren of the current list,
/// which sits at `depth`.
fn list_body(stream: &mut TokenStream<'_, '_>, depth: usize) -> Result<Vec<Node>, SyntaxError> {
    let mut items = Vec::new();
    loop {
        let Some(token) = stream.next() else {
            return Err(SyntaxError::UnexpectedEnd {
                offset: stream.end_offset(),
            });
        };
        let node = match token.kind {
            TokenKind::RParen => return Ok(items),
            TokenKind::LParen if depth == MAX_DEPTH => {
                return Err(SyntaxError::NestingTooDeep {
                    limit: MAX_DEPTH,
                    offset: token.offset,
                });
            }
            TokenKind::LParen => Node::List(list_body(stream, depth + 1)?),
            TokenKind::Number => Node::Number(number(token)?),
            TokenKind::String => Node::Text(unescape(strip_quotes(token.text))),
            TokenKind::Symbol => Node::Sym(Symbol::new(token.text)),
        };
        items.push(node);
    }
}

// -- Atoms ------------------------------------------------------------------

fn number(token: &Token<'_>) -> Result<Number, SyntaxError> {
    let invalid = || SyntaxError::InvalidNumber {
        text: token.text.to_owned(),
        offset: token.offset,
    };
    if token.text.contains('.') {
        token.text.parse().map(Number::Float).map_err(|_| invalid())
    } else {
        token.text.parse().map(Number::Int).map_err(|_| invalid())
    }
}

fn strip_quotes(lexeme: &str) -> &str {
    let inner = lexeme.strip_prefix('"').unwrap_or(lexeme);
    inner.strip_suffix('"').unwrap_or(inner)
}

/// Resolve backslash escapes. Unknown escapes are kept as written.
pub(crate) fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
