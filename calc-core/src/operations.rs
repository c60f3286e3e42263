//! Operation library: add, subtract, multiply.
//!
//! Each operation accepts two loosely typed [`Operand`]s, validates that both are numeric
//! (integer or floating-point) and returns the result as `f64`. Non-numeric operands are
//! rejected with [`OperandError::InvalidType`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OperandError;

/// A value handed to the operation library. JSON input deserializes into `Int` or `Float` when
/// numeric and into `Other` for anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i64),
    Float(f64),
    Other(Value),
}

impl Operand {
    /// Numeric value, or `None` for non-numeric operands.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Int(n) => Some(*n as f64),
            Operand::Float(x) => Some(*x),
            Operand::Other(Value::Number(n)) => n.as_f64(),
            Operand::Other(_) => None,
        }
    }

    /// Observed kind of the operand, used in rejection messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Int(_) => "int",
            Operand::Float(_) => "float",
            Operand::Other(Value::Null) => "null",
            Operand::Other(Value::Bool(_)) => "bool",
            Operand::Other(Value::Number(_)) => "number",
            Operand::Other(Value::String(_)) => "str",
            Operand::Other(Value::Array(_)) => "list",
            Operand::Other(Value::Object(_)) => "dict",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(n) => write!(f, "{}", n),
            Operand::Float(x) => f.write_str(&format_number(*x)),
            Operand::Other(Value::String(s)) => f.write_str(s),
            Operand::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        if let Some(n) = value.as_i64() {
            return Operand::Int(n);
        }
        if let Some(x) = value.as_f64() {
            return Operand::Float(x);
        }
        Operand::Other(value)
    }
}

/// The three supported operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Function name reported in rejection messages.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    pub fn apply(&self, a: &Operand, b: &Operand) -> Result<f64, OperandError> {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sum of `a` and `b`.
pub fn add(a: &Operand, b: &Operand) -> Result<f64, OperandError> {
    let (x, y) = numeric_pair(Operation::Add, a, b)?;
    Ok(x + y)
}

/// `a` minus `b` (`a` is the minuend).
pub fn subtract(a: &Operand, b: &Operand) -> Result<f64, OperandError> {
    let (x, y) = numeric_pair(Operation::Subtract, a, b)?;
    Ok(x - y)
}

/// Product of `a` and `b`.
pub fn multiply(a: &Operand, b: &Operand) -> Result<f64, OperandError> {
    let (x, y) = numeric_pair(Operation::Multiply, a, b)?;
    Ok(x * y)
}

fn numeric_pair(op: Operation, a: &Operand, b: &Operand) -> Result<(f64, f64), OperandError> {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(OperandError::InvalidType {
            operation: op.name(),
            a: a.to_string(),
            a_kind: a.kind(),
            b: b.to_string(),
            b_kind: b.kind(),
        }),
    }
}

/// Renders a float the way replies show numbers: shortest round-trip form, integral values keep
/// a trailing `.0` (`5.0`, `-2.5`, `7.5`).
///
/// Below `1e-4` and from `1e16` up the exponent form is used, always signed and at least two
/// digits wide (`1e-05`, `1e+16`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Debug switches to exponent form at the same magnitudes, as `1e-5` / `1e16`.
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_operations_on_floats() {
        let a = Operand::from(10.0);
        let b = Operand::from(-2.5);
        assert_eq!(add(&a, &b).unwrap(), 7.5);
        assert_eq!(subtract(&a, &b).unwrap(), 12.5);
        assert_eq!(multiply(&a, &b).unwrap(), -25.0);
    }

    #[test]
    fn test_operations_accept_ints() {
        let a = Operand::from(7_i64);
        let b = Operand::from(3_i64);
        assert_eq!(add(&a, &b).unwrap(), 10.0);
        assert_eq!(subtract(&a, &b).unwrap(), 4.0);
        assert_eq!(multiply(&a, &Operand::from(0.5)).unwrap(), 3.5);
    }

    #[test]
    fn test_non_numeric_operand_rejected_by_all_operations() {
        let text = Operand::from(json!("five"));
        let num = Operand::from(3.0);
        for op in [Operation::Add, Operation::Subtract, Operation::Multiply] {
            let err = op.apply(&text, &num).unwrap_err();
            let OperandError::InvalidType {
                operation,
                a,
                a_kind,
                b,
                b_kind,
            } = err;
            assert_eq!(operation, op.name());
            assert_eq!(a, "five");
            assert_eq!(a_kind, "str");
            assert_eq!(b, "3.0");
            assert_eq!(b_kind, "float");
        }
    }

    #[test]
    fn test_rejection_message_names_function_and_kinds() {
        let err = add(&Operand::from(1_i64), &Operand::from(json!(null))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "数値以外の引数が指定されました。関数名: add, 引数a: 1 (型: int), 引数b: null (型: null)"
        );
    }

    #[test]
    fn test_second_operand_checked_too() {
        assert!(multiply(&Operand::from(2.0), &Operand::from(json!([1, 2]))).is_err());
        assert!(subtract(&Operand::from(2.0), &Operand::from(json!(true))).is_err());
    }

    #[test]
    fn test_operand_deserializes_from_json() {
        let int: Operand = serde_json::from_value(json!(4)).unwrap();
        assert_eq!(int, Operand::Int(4));
        let float: Operand = serde_json::from_value(json!(4.5)).unwrap();
        assert_eq!(float, Operand::Float(4.5));
        let text: Operand = serde_json::from_value(json!("4")).unwrap();
        assert_eq!(text.kind(), "str");
        assert!(text.as_f64().is_none());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }

    #[test]
    fn test_format_number_exponent_forms() {
        assert_eq!(format_number(0.00001), "1e-05");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(1.5e-7), "1.5e-07");
        assert_eq!(format_number(-2.5e-10), "-2.5e-10");
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1e15), "1000000000000000.0");
        assert_eq!(format_number(1.5e20), "1.5e+20");
        assert_eq!(format_number(1e300), "1e+300");
        assert_eq!(format_number(0.0), "0.0");
    }

    proptest! {
        #[test]
        fn prop_operations_match_float_arithmetic(a in -1.0e12f64..1.0e12, b in -1.0e12f64..1.0e12) {
            let (x, y) = (Operand::from(a), Operand::from(b));
            prop_assert_eq!(add(&x, &y).unwrap(), a + b);
            prop_assert_eq!(subtract(&x, &y).unwrap(), a - b);
            prop_assert_eq!(multiply(&x, &y).unwrap(), a * b);
        }
    }
}
