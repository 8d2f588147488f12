//! A tiny S-expression rule language.
//!
//! Rules are written as text, compiled once into a [`Rule`], and applied to any
//! number of contexts:
//!
//! ```
//! use genruler::{Value, parse_rule};
//!
//! let rule = parse_rule(r#"(condition.equal (basic.field "name") "John")"#).unwrap();
//! assert_eq!(rule.apply(&Value::map([("name", "John")])).unwrap(), Value::Bool(true));
//! assert_eq!(rule.apply(&Value::map([("name", "Jane")])).unwrap(), Value::Bool(false));
//! ```
//!
//! Each form's head symbol names a function as `namespace.function`, resolved
//! against an [`Environment`]. The built-in environment provides the
//! [`library`] namespaces; [`parse_rule_with`] accepts any other.

mod error;
mod evaluate;
pub mod library;
pub mod parse;
mod types;

use std::path::Path;

pub use error::GenrulerError;
pub use evaluate::evaluate;
pub use library::compute;
pub use parse::read;
pub use types::{
    ArgumentError, Context, Environment, EnvironmentBuilder, EvalError, Function,
    InvalidFunctionNameError, Key, Namespace, NamespaceBuilder, Node, NonCallableResultError,
    Number, Rule, Symbol, Value,
};

/// Compile a rule against the built-in environment.
///
/// # Errors
///
/// See [`parse_rule_with`].
pub fn parse_rule(source: &str) -> Result<Rule, GenrulerError> {
    parse_rule_with(source, Environment::builtin())
}

/// Compile a rule, resolving function names against `env`.
///
/// # Errors
///
/// Returns [`GenrulerError`] if the source does not tokenize or parse, a symbol
/// does not resolve, a builder rejects its arguments, or the form does not reduce
/// to a rule (for example `(1 2 3)`).
pub fn parse_rule_with(source: &str, env: &Environment) -> Result<Rule, GenrulerError> {
    let tree = read(source)?;
    let items = tree.as_list().unwrap_or_default();
    tracing::debug!(forms = items.len(), "parsed rule source");

    let result = evaluate(items, env)?;
    match result.as_rule() {
        Some(rule) => Ok(rule.clone()),
        None => {
            tracing::debug!(result = result.type_name(), "rule source did not reduce to a rule");
            Err(NonCallableResultError {
                type_name: result.type_name(),
            }
            .into())
        }
    }
}

/// Read a rule source file and compile it against `env`.
///
/// # Errors
///
/// Returns [`GenrulerError::Io`] if the file cannot be read, otherwise as
/// [`parse_rule_with`].
pub fn parse_rule_file(path: impl AsRef<Path>, env: &Environment) -> Result<Rule, GenrulerError> {
    let source = std::fs::read_to_string(path)?;
    parse_rule_with(&source, env)
}
