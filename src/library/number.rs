//! Arithmetic over `Int` and `Float` values.
//!
//! Integer operands stay integers and overflow is an error; a single float
//! operand makes the result a float. `divide` always returns a float.

use super::{compute, first_and_rest, rule};
use crate::types::{ArgumentError, Context, EvalError, Value};

#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    fn from_value(operation: &'static str, value: &Value) -> Result<Self, EvalError> {
        match value {
            Value::Int(v) => Ok(Num::Int(*v)),
            Value::Float(v) => Ok(Num::Float(*v)),
            other => Err(EvalError::type_mismatch(operation, "number", other)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Num::Int(v) => v as f64,
            Num::Float(v) => v,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Num::Int(v) => v == 0,
            Num::Float(v) => v == 0.0,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Num::Int(v) => Value::Int(v),
            Num::Float(v) => Value::Float(v),
        }
    }
}

/// One binary step of a fold: an integer operation and its float counterpart.
struct Step {
    operation: &'static str,
    int: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
}

impl Step {
    fn apply(&self, left: Num, right: Num) -> Result<Num, EvalError> {
        match (left, right) {
            (Num::Int(a), Num::Int(b)) => (self.int)(a, b)
                .map(Num::Int)
                .ok_or(EvalError::Overflow {
                    operation: self.operation,
                }),
            (a, b) => Ok(Num::Float((self.float)(a.as_f64(), b.as_f64()))),
        }
    }
}

const ADD: Step = Step {
    operation: "number.add",
    int: i64::checked_add,
    float: |a, b| a + b,
};

const SUBTRACT: Step = Step {
    operation: "number.subtract",
    int: i64::checked_sub,
    float: |a, b| a - b,
};

const MULTIPLY: Step = Step {
    operation: "number.multiply",
    int: i64::checked_mul,
    float: |a, b| a * b,
};

const MODULO: Step = Step {
    operation: "number.modulo",
    int: floored_rem,
    float: |a, b| {
        let r = a % b;
        if r != 0.0 && (r < 0.0) != (b < 0.0) {
            r + b
        } else {
            r
        }
    },
};

/// Remainder with the sign of the divisor.
fn floored_rem(a: i64, b: i64) -> Option<i64> {
    // `i64::MIN % -1` overflows only in the intermediate quotient.
    let r = if b == -1 { 0 } else { a.checked_rem(b)? };
    if r != 0 && (r < 0) != (b < 0) {
        r.checked_add(b)
    } else {
        Some(r)
    }
}

fn operand(operation: &'static str, arg: &Value, ctx: &Context) -> Result<Num, EvalError> {
    Num::from_value(operation, &compute(arg, ctx)?)
}

/// Fold from an identity element.
fn fold(step: &'static Step, identity: Num, args: Vec<Value>) -> Result<Value, ArgumentError> {
    rule(move |ctx| {
        args.iter()
            .try_fold(identity, |acc, arg| step.apply(acc, operand(step.operation, arg, ctx)?))
            .map(Num::into_value)
    })
}

/// Fold from the first argument. Zero divisors are rejected when `nonzero` is set.
fn reduce(step: &'static Step, nonzero: bool, args: Vec<Value>) -> Result<Value, ArgumentError> {
    let (first, rest) = first_and_rest(step.operation, args)?;
    rule(move |ctx| {
        let first = operand(step.operation, &first, ctx)?;
        rest.iter()
            .try_fold(first, |acc, arg| {
                let divisor = operand(step.operation, arg, ctx)?;
                if nonzero && divisor.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                step.apply(acc, divisor)
            })
            .map(Num::into_value)
    })
}

/// `(number.add a b ...)`; `0` with no arguments.
pub fn add(args: Vec<Value>) -> Result<Value, ArgumentError> {
    fold(&ADD, Num::Int(0), args)
}

/// `(number.multiply a b ...)`; `1` with no arguments.
pub fn multiply(args: Vec<Value>) -> Result<Value, ArgumentError> {
    fold(&MULTIPLY, Num::Int(1), args)
}

/// `(number.subtract a b ...)`: `a - b - ...`.
pub fn subtract(args: Vec<Value>) -> Result<Value, ArgumentError> {
    reduce(&SUBTRACT, false, args)
}

/// `(number.modulo a b ...)`: `(a % b) % ...`, each remainder taking the sign
/// of its divisor.
pub fn modulo(args: Vec<Value>) -> Result<Value, ArgumentError> {
    reduce(&MODULO, true, args)
}

/// `(number.divide a b ...)`: `a / b / ...` as a float.
pub fn divide(args: Vec<Value>) -> Result<Value, ArgumentError> {
    let (first, rest) = first_and_rest("number.divide", args)?;
    rule(move |ctx| {
        let mut quotient = operand("number.divide", &first, ctx)?.as_f64();
        for arg in &rest {
            let divisor = operand("number.divide", arg, ctx)?;
            if divisor.is_zero() {
                return Err(EvalError::DivisionByZero);
            }
            quotient /= divisor.as_f64();
        }
        Ok(Value::Float(quotient))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::testing::{deferred, key, run};

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    #[test]
    fn add_numbers() {
        assert_eq!(run(add(ints(&[2, 3])), &Value::Null).unwrap(), Value::Int(5));
        assert_eq!(run(add(ints(&[1, 2, 3, 4])), &Value::Null).unwrap(), Value::Int(10));
        assert_eq!(run(add(vec![]), &Value::Null).unwrap(), Value::Int(0));
        let ctx = Value::map([("a", 10_i64), ("b", 20)]);
        assert_eq!(run(add(vec![key("a"), key("b")]), &ctx).unwrap(), Value::Int(30));
    }

    #[test]
    fn add_promotes_to_float() {
        let result = run(add(vec![Value::Int(1), Value::Float(0.5)]), &Value::Null).unwrap();
        assert!(matches!(result, Value::Float(v) if v == 1.5));
    }

    #[test]
    fn add_overflow() {
        assert_eq!(
            run(add(ints(&[i64::MAX, 1])), &Value::Null).unwrap_err(),
            EvalError::Overflow {
                operation: "number.add"
            }
        );
    }

    #[test]
    fn add_rejects_non_numbers() {
        assert!(matches!(
            run(add(vec![Value::Int(1), "2".into()]), &Value::Null),
            Err(EvalError::Type { .. })
        ));
        assert!(matches!(
            run(add(vec![Value::Bool(true)]), &Value::Null),
            Err(EvalError::Type { .. })
        ));
    }

    #[test]
    fn subtract_left_to_right() {
        assert_eq!(run(subtract(ints(&[10, 3])), &Value::Null).unwrap(), Value::Int(7));
        assert_eq!(run(subtract(ints(&[20, 5, 3])), &Value::Null).unwrap(), Value::Int(12));
        assert_eq!(run(subtract(ints(&[4])), &Value::Null).unwrap(), Value::Int(4));
        let ctx = Value::map([("total", 100_i64), ("deduction", 25)]);
        assert_eq!(
            run(subtract(vec![key("total"), key("deduction")]), &ctx).unwrap(),
            Value::Int(75)
        );
        assert!(matches!(subtract(vec![]), Err(ArgumentError::Arity { got: 0, .. })));
    }

    #[test]
    fn multiply_numbers() {
        assert_eq!(run(multiply(ints(&[4, 3])), &Value::Null).unwrap(), Value::Int(12));
        assert_eq!(run(multiply(ints(&[2, 3, 4])), &Value::Null).unwrap(), Value::Int(24));
        assert_eq!(run(multiply(vec![]), &Value::Null).unwrap(), Value::Int(1));
        let ctx = Value::map([("quantity", 5_i64), ("price", 10)]);
        assert_eq!(
            run(multiply(vec![key("quantity"), key("price")]), &ctx).unwrap(),
            Value::Int(50)
        );
    }

    #[test]
    fn divide_returns_float() {
        let result = run(divide(ints(&[12, 3])), &Value::Null).unwrap();
        assert!(matches!(result, Value::Float(v) if v == 4.0));
        assert_eq!(run(divide(ints(&[100, 2, 5])), &Value::Null).unwrap(), Value::Float(10.0));
        let ctx = Value::map([("total", 100_i64), ("parts", 4)]);
        assert_eq!(
            run(divide(vec![key("total"), key("parts")]), &ctx).unwrap(),
            Value::Float(25.0)
        );
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(
            run(divide(ints(&[10, 0])), &Value::Null).unwrap_err(),
            EvalError::DivisionByZero
        );
        assert_eq!(
            run(divide(vec![Value::Int(1), Value::Float(0.0)]), &Value::Null).unwrap_err(),
            EvalError::DivisionByZero
        );
    }

    #[test]
    fn modulo_numbers() {
        assert_eq!(run(modulo(ints(&[17, 5])), &Value::Null).unwrap(), Value::Int(2));
        assert_eq!(run(modulo(ints(&[100, 30, 7])), &Value::Null).unwrap(), Value::Int(3));
        let ctx = Value::map([("items", 47_i64), ("per_page", 10)]);
        assert_eq!(
            run(modulo(vec![key("items"), key("per_page")]), &ctx).unwrap(),
            Value::Int(7)
        );
        assert_eq!(
            run(modulo(ints(&[10, 0])), &Value::Null).unwrap_err(),
            EvalError::DivisionByZero
        );
    }

    #[test]
    fn modulo_takes_divisor_sign() {
        assert_eq!(run(modulo(ints(&[-7, 3])), &Value::Null).unwrap(), Value::Int(2));
        assert_eq!(run(modulo(ints(&[7, -3])), &Value::Null).unwrap(), Value::Int(-2));
        assert_eq!(run(modulo(ints(&[-6, 3])), &Value::Null).unwrap(), Value::Int(0));
        assert_eq!(run(modulo(ints(&[i64::MIN, -1])), &Value::Null).unwrap(), Value::Int(0));
        assert_eq!(run(modulo(ints(&[i64::MIN, 1])), &Value::Null).unwrap(), Value::Int(0));
        assert_eq!(
            run(modulo(vec![Value::Float(-7.5), Value::Int(2)]), &Value::Null).unwrap(),
            Value::Float(0.5)
        );
    }

    #[test]
    fn operands_are_computed_per_application() {
        let rule = add(vec![deferred(|_| Ok(Value::Int(5))), deferred(|_| Ok(Value::Int(3)))]);
        assert_eq!(run(rule, &Value::Null).unwrap(), Value::Int(8));
    }
}
