use winnow::ascii::digit1;
use winnow::combinator::{alt, opt};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use super::error::LexError;

/// Lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    LParen,
    RParen,
    String,
    Number,
    Symbol,
}

/// A lexeme borrowed from the source, with its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Raw lexeme. String tokens keep their quotes.
    pub text: &'src str,
    pub offset: usize,
}

impl<'src> Token<'src> {
    #[must_use]
    pub fn new(kind: TokenKind, text: &'src str, offset: usize) -> Self {
        Self { kind, text, offset }
    }

    /// Offset one past the last byte of the lexeme.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

// -- Lexemes ----------------------------------------------------------------

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_symbol_char(c: char) -> bool {
    !(c.is_whitespace() || matches!(c, '(' | ')' | '"'))
}

// No escape handling here; the parser resolves escapes when it builds the text value.
fn string_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    ('"', take_till(0.., '"'), '"').take().parse_next(input)
}

fn number<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (opt('-'), digit1, opt(('.', digit1)))
        .take()
        .parse_next(input)
}

fn symbol<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_symbol_char).parse_next(input)
}

fn lexeme<'i>(input: &mut &'i str) -> ModalResult<(TokenKind, &'i str)> {
    alt((
        '('.take().map(|t| (TokenKind::LParen, t)),
        ')'.take().map(|t| (TokenKind::RParen, t)),
        string_literal.map(|t| (TokenKind::String, t)),
        number.map(|t| (TokenKind::Number, t)),
        symbol.map(|t| (TokenKind::Symbol, t)),
    ))
    .parse_next(input)
}

// -- Tokenizer --------------------------------------------------------------

/// Split source text into tokens, dropping spaces, tabs and line breaks.
///
/// # Errors
///
/// Returns [`LexError::UnterminatedString`] for a quote with no closing quote, and
/// [`LexError::UnexpectedCharacter`] for whitespace other than space, tab, CR and LF.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut input = source;
    let mut tokens = Vec::new();

    loop {
        input = input.trim_start_matches(is_blank);
        if input.is_empty() {
            return Ok(tokens);
        }
        let offset = source.len() - input.len();
        let rest = input;
        match lexeme.parse_next(&mut input) {
            Ok((kind, text)) => tokens.push(Token::new(kind, text, offset)),
            Err(_) => {
                return Err(match rest.chars().next() {
                    Some('"') => LexError::UnterminatedString { offset },
                    other => LexError::UnexpectedCharacter {
                        ch: other.unwrap_or_default(),
                        offset,
                    },
                });
            }
        }
    }
}
