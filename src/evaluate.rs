use crate::types::{Environment, Node, Number, Value};
use crate::GenrulerError;

/// Reduce the elements of a parenthesized form.
///
/// Elements are reduced left to right into an accumulator: symbols resolve to
/// functions, nested forms are reduced recursively, literals are taken as they are.
/// If the first accumulated element is a function it is called with the rest as
/// arguments; otherwise the accumulator itself is the result, as a
/// [`Value::List`].
///
/// Nested calls are reduced here, eagerly. Anything that depends on the context is
/// deferred only because builders return [`Value::Rule`]s.
///
/// # Errors
///
/// Returns [`GenrulerError::InvalidFunctionName`] for unresolvable symbols and
/// [`GenrulerError::InvalidArguments`] if a builder rejects its arguments.
pub fn evaluate(list: &[Node], env: &Environment) -> Result<Value, GenrulerError> {
    let acc = list
        .iter()
        .map(|node| element(node, env))
        .collect::<Result<Vec<_>, _>>()?;
    call(acc)
}

fn element(node: &Node, env: &Environment) -> Result<Value, GenrulerError> {
    Ok(match node {
        Node::Sym(symbol) => Value::Function(env.resolve_symbol(symbol)?),
        Node::List(items) => match explicit_pair(items) {
            Some((namespace, function)) => Value::Function(env.resolve(namespace, function)?),
            None => evaluate(items, env)?,
        },
        Node::Number(Number::Int(v)) => Value::Int(*v),
        Node::Number(Number::Float(v)) => Value::Float(*v),
        Node::Text(s) => Value::String(s.clone()),
    })
}

/// `(. namespace function)` names a function without a dotted symbol.
fn explicit_pair(items: &[Node]) -> Option<(&str, &str)> {
    match items {
        [Node::Sym(dot), Node::Sym(namespace), Node::Sym(function)] if dot.name() == "." => {
            Some((namespace.name(), function.name()))
        }
        _ => None,
    }
}

fn call(mut acc: Vec<Value>) -> Result<Value, GenrulerError> {
    match acc.first() {
        Some(Value::Function(func)) => {
            let func = func.clone();
            let args = acc.split_off(1);
            tracing::trace!(function = func.name(), args = args.len(), "calling builder");
            Ok(func.call(args)?)
        }
        _ => Ok(Value::List(acc)),
    }
}
