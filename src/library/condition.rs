//! Predicates. All of them return `Value::Bool`.

use std::cmp::Ordering;

use super::{compute, exactly, rule};
use crate::types::{ArgumentError, EvalError, Key, Value};

pub fn equal(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [left, right] = exactly::<2>("condition.equal", args)?;
    rule(move |ctx| Ok(Value::Bool(compute(&left, ctx)? == compute(&right, ctx)?)))
}

/// `(condition.in needle haystack)`: membership in a list, substring of a
/// string, or key of a map.
pub fn in_(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [needle, haystack] = exactly::<2>("condition.in", args)?;
    rule(move |ctx| {
        let needle = compute(&needle, ctx)?;
        let found = match compute(&haystack, ctx)? {
            Value::List(items) => items.contains(&needle),
            Value::String(text) => match &needle {
                Value::String(part) => text.contains(part.as_str()),
                other => return Err(EvalError::type_mismatch("condition.in", "string", other)),
            },
            Value::Map(entries) => {
                Key::try_from(&needle).is_ok_and(|key| entries.contains_key(&key))
            }
            other => {
                return Err(EvalError::type_mismatch(
                    "condition.in",
                    "list, string or map",
                    &other,
                ))
            }
        };
        Ok(Value::Bool(found))
    })
}

/// True only for `null`.
pub fn is_none(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [operand] = exactly::<1>("condition.is_none", args)?;
    rule(move |ctx| Ok(Value::Bool(compute(&operand, ctx)?.is_null())))
}

/// True only for `true`; other truthy values do not count.
pub fn is_true(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [operand] = exactly::<1>("condition.is_true", args)?;
    rule(move |ctx| Ok(Value::Bool(matches!(compute(&operand, ctx)?, Value::Bool(true)))))
}

pub fn gt(args: Vec<Value>) -> Result<Value, ArgumentError> {
    ordering("condition.gt", args, Ordering::is_gt)
}

pub fn ge(args: Vec<Value>) -> Result<Value, ArgumentError> {
    ordering("condition.ge", args, Ordering::is_ge)
}

pub fn lt(args: Vec<Value>) -> Result<Value, ArgumentError> {
    ordering("condition.lt", args, Ordering::is_lt)
}

pub fn le(args: Vec<Value>) -> Result<Value, ArgumentError> {
    ordering("condition.le", args, Ordering::is_le)
}

fn ordering(
    operation: &'static str,
    args: Vec<Value>,
    accept: fn(Ordering) -> bool,
) -> Result<Value, ArgumentError> {
    let [left, right] = exactly::<2>(operation, args)?;
    rule(move |ctx| {
        let left = compute(&left, ctx)?;
        let right = compute(&right, ctx)?;
        left.compare(&right)
            .map(|ord| Value::Bool(accept(ord)))
            .ok_or(EvalError::Incomparable {
                operation,
                left: left.type_name(),
                right: right.type_name(),
            })
    })
}
