//! Boolean connectives. All of them return `Value::Bool`.

use super::{compute, exactly, rule};
use crate::types::{ArgumentError, Value};

/// `(boolean.and a b ...)`: true when every argument is truthy. Stops at the
/// first falsy one.
pub fn and_(args: Vec<Value>) -> Result<Value, ArgumentError> {
    rule(move |ctx| {
        for arg in &args {
            if !compute(arg, ctx)?.is_truthy() {
                return Ok(Value::Bool(false));
            }
        }
        Ok(Value::Bool(true))
    })
}

/// `(boolean.or a b ...)`: true when any argument is truthy. Stops at the first
/// truthy one.
pub fn or_(args: Vec<Value>) -> Result<Value, ArgumentError> {
    rule(move |ctx| {
        for arg in &args {
            if compute(arg, ctx)?.is_truthy() {
                return Ok(Value::Bool(true));
            }
        }
        Ok(Value::Bool(false))
    })
}

pub fn not_(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [operand] = exactly::<1>("boolean.not", args)?;
    rule(move |ctx| Ok(Value::Bool(!compute(&operand, ctx)?.is_truthy())))
}

pub fn tautology(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [] = exactly::<0>("boolean.tautology", args)?;
    rule(|_| Ok(Value::Bool(true)))
}

pub fn contradiction(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let [] = exactly::<0>("boolean.contradiction", args)?;
    rule(|_| Ok(Value::Bool(false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::basic;
    use crate::library::testing::{deferred, run};
    use crate::types::EvalError;

    fn bools(values: &[bool]) -> Vec<Value> {
        values.iter().copied().map(Value::Bool).collect()
    }

    #[test]
    fn and_truth_table() {
        let ctx = Value::Null;
        for (args, expected) in [
            (&[true, true][..], true),
            (&[true, false], false),
            (&[false, true], false),
            (&[false, false], false),
            (&[true, true, false], false),
            (&[true, true, true], true),
            (&[], true),
        ] {
            assert_eq!(
                run(and_(bools(args)), &ctx).unwrap(),
                Value::Bool(expected),
                "and {args:?}"
            );
        }
    }

    #[test]
    fn or_truth_table() {
        let ctx = Value::Null;
        for (args, expected) in [
            (&[true, true][..], true),
            (&[true, false], true),
            (&[false, true], true),
            (&[false, false], false),
            (&[true, true, false], true),
            (&[], false),
        ] {
            assert_eq!(
                run(or_(bools(args)), &ctx).unwrap(),
                Value::Bool(expected),
                "or {args:?}"
            );
        }
    }

    #[test]
    fn connectives_accept_rules() {
        let truth = basic::value(vec![Value::Bool(true)]).unwrap();
        let args = vec![Value::Bool(true), truth.clone(), Value::Bool(true)];
        assert_eq!(run(and_(args.clone()), &Value::Null).unwrap(), Value::Bool(true));
        assert_eq!(run(or_(args), &Value::Null).unwrap(), Value::Bool(true));
        assert_eq!(run(not_(vec![truth]), &Value::Null).unwrap(), Value::Bool(false));
    }

    #[test]
    fn connectives_short_circuit() {
        let boom = deferred(|_| Err(EvalError::custom("evaluated")));
        assert_eq!(
            run(and_(vec![Value::Bool(false), boom.clone()]), &Value::Null).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            run(or_(vec![Value::Bool(true), boom.clone()]), &Value::Null).unwrap(),
            Value::Bool(true)
        );
        assert!(run(and_(vec![Value::Bool(true), boom]), &Value::Null).is_err());
    }

    #[test]
    fn truthiness_of_non_bools() {
        let args = vec![Value::Int(1), Value::from("x")];
        assert_eq!(run(and_(args), &Value::Null).unwrap(), Value::Bool(true));
        assert_eq!(run(not_(vec![Value::from("")]), &Value::Null).unwrap(), Value::Bool(true));
    }

    #[test]
    fn constants() {
        assert_eq!(run(tautology(vec![]), &Value::Null).unwrap(), Value::Bool(true));
        assert_eq!(run(contradiction(vec![]), &Value::Null).unwrap(), Value::Bool(false));
        assert!(tautology(vec![Value::Null]).is_err());
        assert!(not_(vec![]).is_err());
    }
}
