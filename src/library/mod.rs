//! Built-in rule builders.
//!
//! Every builder takes its reduced arguments and returns a [`Value::Rule`]. Any
//! argument may itself be a rule; builders resolve their arguments with
//! [`compute`] each time the rule is applied, so context lookups stay deferred.
//!
//! Functions whose natural name is a reserved word carry a trailing underscore
//! (`boolean::and_`) and are still written `boolean.and` in rule source.

pub mod basic;
pub mod boolean;
pub mod condition;
pub mod list;
pub mod number;
pub mod string;

use crate::types::{ArgumentError, Context, Environment, EvalError, Rule, Value};

/// Resolve an argument against a context.
///
/// Rules are applied to `context`; any other value is already resolved and is
/// returned as is.
///
/// # Errors
///
/// Propagates the error of the applied rule.
///
/// ```
/// use genruler::{Rule, Value, compute};
///
/// let ctx = Value::map([("foo", "bar")]);
/// let deferred = Value::Rule(Rule::new(|ctx| ctx.index(&Value::from("foo")).cloned()));
/// assert_eq!(compute(&deferred, &ctx).unwrap(), Value::from("bar"));
/// assert_eq!(compute(&Value::from("meow"), &ctx).unwrap(), Value::from("meow"));
/// ```
pub fn compute(argument: &Value, context: &Context) -> Result<Value, EvalError> {
    match argument {
        Value::Rule(rule) => rule.apply(context),
        other => Ok(other.clone()),
    }
}

pub(crate) fn builtin_environment() -> Environment {
    tracing::debug!("building built-in environment");
    Environment::builder()
        .namespace("basic", |ns| {
            ns.function("coalesce", basic::coalesce)
                .function("context", basic::context)
                .function("field", basic::field)
                .function("value", basic::value)
        })
        .namespace("boolean", |ns| {
            ns.function("and_", boolean::and_)
                .function("or_", boolean::or_)
                .function("not_", boolean::not_)
                .function("tautology", boolean::tautology)
                .function("contradiction", boolean::contradiction)
        })
        .namespace("condition", |ns| {
            ns.function("equal", condition::equal)
                .function("in_", condition::in_)
                .function("is_none", condition::is_none)
                .function("is_true", condition::is_true)
                .function("gt", condition::gt)
                .function("ge", condition::ge)
                .function("lt", condition::lt)
                .function("le", condition::le)
        })
        .namespace("list", |ns| ns.function("length", list::length))
        .namespace("number", |ns| {
            ns.function("add", number::add)
                .function("subtract", number::subtract)
                .function("multiply", number::multiply)
                .function("divide", number::divide)
                .function("modulo", number::modulo)
        })
        .namespace("string", |ns| {
            ns.function("concat", string::concat)
                .function("concat_fields", string::concat_fields)
                .function("field", string::field)
                .function("lower", string::lower)
        })
        .build()
}

// -- Builder helpers --------------------------------------------------------

pub(crate) fn rule<F>(f: F) -> Result<Value, ArgumentError>
where
    F: Fn(&Context) -> Result<Value, EvalError> + Send + Sync + 'static,
{
    Ok(Value::Rule(Rule::new(f)))
}

/// Take exactly `N` arguments.
pub(crate) fn exactly<const N: usize>(
    function: &str,
    args: Vec<Value>,
) -> Result<[Value; N], ArgumentError> {
    let got = args.len();
    args.try_into().map_err(|_| ArgumentError::Arity {
        function: function.to_owned(),
        expected: N.to_string(),
        got,
    })
}

/// Take at least one argument, splitting off the first.
pub(crate) fn first_and_rest(
    function: &str,
    mut args: Vec<Value>,
) -> Result<(Value, Vec<Value>), ArgumentError> {
    if args.is_empty() {
        return Err(ArgumentError::Arity {
            function: function.to_owned(),
            expected: "at least 1".to_owned(),
            got: 0,
        });
    }
    let rest = args.split_off(1);
    let first = args.pop().unwrap_or(Value::Null);
    Ok((first, rest))
}

/// Take a required argument followed by an optional one.
pub(crate) fn one_or_two(
    function: &str,
    args: Vec<Value>,
) -> Result<(Value, Option<Value>), ArgumentError> {
    if !(1..=2).contains(&args.len()) {
        return Err(ArgumentError::Arity {
            function: function.to_owned(),
            expected: "1 to 2".to_owned(),
            got: args.len(),
        });
    }
    let mut args = args.into_iter();
    let required = args.next().unwrap_or(Value::Null);
    Ok((required, args.next()))
}

/// Look up a computed key in the context, falling back to `default` when nothing
/// is stored under it.
pub(crate) fn lookup(
    ctx: &Context,
    key: &Value,
    default: Option<&Value>,
) -> Result<Value, EvalError> {
    let key = compute(key, ctx)?;
    match (ctx.index(&key), default) {
        (Ok(value), _) => Ok(value.clone()),
        (
            Err(EvalError::MissingKey { .. } | EvalError::IndexOutOfRange { .. }),
            Some(default),
        ) => compute(default, ctx),
        (Err(err), _) => Err(err),
    }
}
