//! Field access and constants.

use super::{compute, exactly, lookup, one_or_two, rule};
use crate::types::{ArgumentError, Value};

/// `(basic.coalesce a b ...)`: the first truthy argument, else the last one.
///
/// Arguments are computed in order and stop at the first truthy value; errors
/// from an argument propagate even when a later one would have been truthy.
pub fn coalesce(args: Vec<Value>) -> Result<Value, ArgumentError> {
    rule(move |ctx| {
        let mut last = Value::Null;
        for arg in &args {
            last = compute(arg, ctx)?;
            if last.is_truthy() {
                break;
            }
        }
        Ok(last)
    })
}

/// `(basic.context ctx rule)`: apply `rule` to the computed `ctx` instead of the
/// current context.
pub fn context(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [sub_context, inner] = exactly::<2>("basic.context", args)?;
    rule(move |ctx| {
        let sub_context = compute(&sub_context, ctx)?;
        compute(&inner, &sub_context)
    })
}

/// `(basic.field key [default])`: the context entry at `key`.
pub fn field(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let (key, default) = one_or_two("basic.field", args)?;
    rule(move |ctx| lookup(ctx, &key, default.as_ref()))
}

/// `(basic.value v)`: a constant. Rules are rejected.
pub fn value(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [constant] = exactly::<1>("basic.value", args)?;
    if matches!(constant, Value::Rule(_)) {
        return Err(ArgumentError::SubRule {
            function: "basic.value".to_owned(),
        });
    }
    rule(move |_| Ok(constant.clone()))
}
