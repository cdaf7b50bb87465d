//! Values written into array literals.

use pk_ir::{Expr, FloatLit, IntLit};
use serde_json::Value;

use crate::EditError;

/// A scalar PHP value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Scalar {
    /// Parse a command-line value: JSON scalars keep their type, anything
    /// that is not JSON is taken as a plain string.
    pub fn parse_cli(text: &str) -> Result<Scalar, EditError> {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Scalar::try_from(value),
            Err(_) => Ok(Scalar::String(text.to_owned())),
        }
    }

    /// Fresh literal node for this value.
    pub fn to_expr(&self) -> Expr {
        match self {
            Scalar::String(value) => Expr::string(value.as_str()),
            Scalar::Int(value) => Expr::Int(IntLit::synthetic(*value)),
            Scalar::Float(value) => Expr::Float(FloatLit::synthetic(*value)),
            Scalar::Bool(true) => Expr::constant("true"),
            Scalar::Bool(false) => Expr::constant("false"),
            Scalar::Null => Expr::constant("null"),
        }
    }

    /// Whether `expr` is a literal holding this value.
    pub fn matches(&self, expr: &Expr) -> bool {
        match (self, expr) {
            (Scalar::String(value), Expr::String(lit)) => lit.value == *value,
            (Scalar::Int(value), Expr::Int(lit)) => lit.value == *value,
            (Scalar::Float(value), Expr::Float(lit)) => lit.value.to_bits() == value.to_bits(),
            (Scalar::Bool(value), Expr::Const(name)) => {
                name.text
                    .eq_ignore_ascii_case(if *value { "true" } else { "false" })
            }
            (Scalar::Null, Expr::Const(name)) => name.text.eq_ignore_ascii_case("null"),
            _ => false,
        }
    }
}

impl TryFrom<Value> for Scalar {
    type Error = EditError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Scalar::Null),
            Value::Bool(value) => Ok(Scalar::Bool(value)),
            Value::Number(number) => match number.as_i64() {
                Some(value) => Ok(Scalar::Int(value)),
                None => number
                    .as_f64()
                    .map(Scalar::Float)
                    .ok_or_else(|| EditError::UnsupportedValue(number.to_string())),
            },
            Value::String(value) => Ok(Scalar::String(value)),
            Value::Array(_) => Err(EditError::UnsupportedValue("array".to_owned())),
            Value::Object(_) => Err(EditError::UnsupportedValue("object".to_owned())),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}
