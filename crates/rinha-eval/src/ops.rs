//! Binary operator semantics.

use rinha_common::Location;
use rinha_syntax::BinOp;

use crate::print::format_number;
use crate::{EvalError, Value};

/// Apply `op` to two evaluated operands.
///
/// Only the combinations listed here are defined; anything else is an
/// operand type mismatch. The one cross-type rule is `+` between a number
/// and a string, which concatenates.
pub(crate) fn binary(op: BinOp, lhs: &Value, rhs: &Value, location: &Location) -> Result<Value, EvalError> {
    use Value::{Boolean, Number, Text};

    let result = match (op, lhs, rhs) {
        (BinOp::Add, Number(a), Number(b)) => Number(a + b),
        (BinOp::Add, Number(a), Text(b)) => Value::text(format!("{}{b}", format_number(*a))),
        (BinOp::Add, Text(a), Number(b)) => Value::text(format!("{a}{}", format_number(*b))),
        (BinOp::Add, Text(a), Text(b)) => Value::text(format!("{a}{b}")),

        (BinOp::Sub, Number(a), Number(b)) => Number(a - b),
        (BinOp::Mul, Number(a), Number(b)) => Number(a * b),
        // IEEE-754: x / 0 is ±inf or NaN, never a fault.
        (BinOp::Div, Number(a), Number(b)) => Number(a / b),
        // Truncated remainder; the sign follows the dividend.
        (BinOp::Rem, Number(a), Number(b)) => Number(a % b),

        (BinOp::Eq, Number(a), Number(b)) => Boolean(a == b),
        (BinOp::Eq, Text(a), Text(b)) => Boolean(a == b),
        (BinOp::Eq, Boolean(a), Boolean(b)) => Boolean(a == b),
        (BinOp::Neq, Number(a), Number(b)) => Boolean(a != b),
        (BinOp::Neq, Text(a), Text(b)) => Boolean(a != b),
        (BinOp::Neq, Boolean(a), Boolean(b)) => Boolean(a != b),

        (BinOp::Lt, Number(a), Number(b)) => Boolean(a < b),
        (BinOp::Gt, Number(a), Number(b)) => Boolean(a > b),
        (BinOp::Lte, Number(a), Number(b)) => Boolean(a <= b),
        (BinOp::Gte, Number(a), Number(b)) => Boolean(a >= b),

        (BinOp::And, Boolean(a), Boolean(b)) => Boolean(*a && *b),
        (BinOp::Or, Boolean(a), Boolean(b)) => Boolean(*a || *b),

        _ => {
            return Err(EvalError::mismatch(
                format!(
                    "cannot apply `{op}` to {} and {}",
                    lhs.type_name(),
                    rhs.type_name()
                ),
                location,
            ))
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: BinOp, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
        binary(op, &lhs, &rhs, &Location::dummy())
    }

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply(BinOp::Add, num(2.0), num(3.0)).unwrap(), num(5.0));
        assert_eq!(apply(BinOp::Sub, num(2.0), num(3.0)).unwrap(), num(-1.0));
        assert_eq!(apply(BinOp::Mul, num(2.5), num(4.0)).unwrap(), num(10.0));
        assert_eq!(apply(BinOp::Div, num(7.0), num(2.0)).unwrap(), num(3.5));
    }

    #[test]
    fn test_remainder_is_not_division() {
        assert_eq!(apply(BinOp::Rem, num(7.0), num(3.0)).unwrap(), num(1.0));
        assert_eq!(apply(BinOp::Rem, num(-7.0), num(3.0)).unwrap(), num(-1.0));
        assert_eq!(apply(BinOp::Rem, num(7.5), num(2.0)).unwrap(), num(1.5));
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        assert_eq!(apply(BinOp::Div, num(1.0), num(0.0)).unwrap(), num(f64::INFINITY));
        assert_eq!(apply(BinOp::Div, num(-1.0), num(0.0)).unwrap(), num(f64::NEG_INFINITY));
        let nan = apply(BinOp::Div, num(0.0), num(0.0)).unwrap();
        assert!(nan.as_number().unwrap().is_nan());
    }

    #[test]
    fn test_concatenation() {
        assert_eq!(apply(BinOp::Add, Value::text("n = "), num(3.0)).unwrap(), Value::text("n = 3"));
        assert_eq!(apply(BinOp::Add, num(1.5), Value::text("x")).unwrap(), Value::text("1.5x"));
        assert_eq!(apply(BinOp::Add, Value::text("a"), Value::text("b")).unwrap(), Value::text("ab"));
    }

    #[test]
    fn test_equality_within_kind() {
        assert_eq!(apply(BinOp::Eq, num(1.0), num(1.0)).unwrap(), Value::Boolean(true));
        assert_eq!(apply(BinOp::Neq, Value::text("a"), Value::text("b")).unwrap(), Value::Boolean(true));
        assert_eq!(
            apply(BinOp::Eq, Value::Boolean(false), Value::Boolean(false)).unwrap(),
            Value::Boolean(true)
        );
    }

    #[test]
    fn test_cross_kind_equality_faults() {
        let err = apply(BinOp::Eq, num(1.0), Value::text("1")).unwrap_err();
        assert!(matches!(err, EvalError::OperandTypeMismatch { .. }));
        assert_eq!(err.to_string(), "cannot apply `==` to number and string");
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(apply(BinOp::Lt, num(1.0), num(2.0)).unwrap(), Value::Boolean(true));
        assert_eq!(apply(BinOp::Gt, num(1.0), num(2.0)).unwrap(), Value::Boolean(false));
        assert_eq!(apply(BinOp::Lte, num(2.0), num(2.0)).unwrap(), Value::Boolean(true));
        assert_eq!(apply(BinOp::Gte, num(1.0), num(2.0)).unwrap(), Value::Boolean(false));
        assert!(apply(BinOp::Lt, Value::text("a"), Value::text("b")).is_err());
    }

    #[test]
    fn test_logic_requires_booleans() {
        assert_eq!(
            apply(BinOp::And, Value::Boolean(true), Value::Boolean(false)).unwrap(),
            Value::Boolean(false)
        );
        assert_eq!(
            apply(BinOp::Or, Value::Boolean(false), Value::Boolean(true)).unwrap(),
            Value::Boolean(true)
        );
        assert!(apply(BinOp::And, num(1.0), Value::Boolean(true)).is_err());
    }

    #[test]
    fn test_no_other_additions() {
        assert!(apply(BinOp::Add, Value::Boolean(true), num(1.0)).is_err());
        let pair = Value::tuple(num(1.0), num(2.0));
        assert!(apply(BinOp::Add, pair, Value::text("x")).is_err());
        assert!(apply(BinOp::Sub, Value::text("a"), num(1.0)).is_err());
    }
}
