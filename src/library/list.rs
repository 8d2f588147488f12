//! Collection helpers.

use super::{compute, exactly, rule};
use crate::types::{ArgumentError, EvalError, Value};

/// `(list.length x)`: element count of a list or map, or character count of a string.
pub fn length(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [operand] = exactly::<1>("list.length", args)?;
    rule(move |ctx| {
        let len = match compute(&operand, ctx)? {
            Value::List(items) => items.len(),
            Value::Map(entries) => entries.len(),
            Value::String(text) => text.chars().count(),
            other => {
                return Err(EvalError::type_mismatch(
                    "list.length",
                    "list, map or string",
                    &other,
                ))
            }
        };
        i64::try_from(len)
            .map(Value::Int)
            .map_err(|_| EvalError::Overflow {
                operation: "list.length",
            })
    })
}
