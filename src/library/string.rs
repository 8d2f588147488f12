//! Text builders. Non-string values are rendered with [`Value::to_text`].

use super::{compute, exactly, first_and_rest, lookup, one_or_two, rule};
use crate::types::{ArgumentError, Context, EvalError, Value};

fn join(
    ctx: &Context,
    separator: &Value,
    parts: impl Iterator<Item = Result<Value, EvalError>>,
) -> Result<Value, EvalError> {
    let separator = compute(separator, ctx)?.to_text();
    let parts = parts
        .map(|part| part.map(|value| value.to_text()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::String(parts.join(&separator)))
}

/// `(string.concat sep a b ...)`: the arguments joined with `sep`.
pub fn concat(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let (separator, parts) = first_and_rest("string.concat", args)?;
    rule(move |ctx| join(ctx, &separator, parts.iter().map(|part| compute(part, ctx))))
}

/// `(string.concat_fields sep k1 k2 ...)`: the context fields at `k1`, `k2`, ...
/// joined with `sep`.
pub fn concat_fields(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let (separator, keys) = first_and_rest("string.concat_fields", args)?;
    rule(move |ctx| join(ctx, &separator, keys.iter().map(|key| lookup(ctx, key, None))))
}

/// `(string.field key [default])`: like `basic.field`, rendered as text.
pub fn field(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let (key, default) = one_or_two("string.field", args)?;
    rule(move |ctx| Ok(Value::String(lookup(ctx, &key, default.as_ref())?.to_text())))
}

pub fn lower(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [operand] = exactly::<1>("string.lower", args)?;
    rule(move |ctx| Ok(Value::String(compute(&operand, ctx)?.to_text().to_lowercase())))
}
