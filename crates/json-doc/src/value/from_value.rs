//! Typed reads out of a [`Value`].

use super::{Map, Value};
use crate::error::TypeError;

/// Conversion from a borrowed [`Value`] to a concrete Rust type.
///
/// Implemented for `bool`, `i64`, `f64`, `&str`, `&String`, `&[Value]`,
/// `&Vec<Value>`, `&Map` and `&Value`.
pub trait FromValue<'a>: Sized {
    fn from_value(value: &'a Value) -> Result<Self, TypeError>;
}

fn mismatch(expected: &'static str, value: &Value) -> TypeError {
    TypeError {
        expected,
        found: value.kind(),
    }
}

impl<'a> FromValue<'a> for &'a Value {
    fn from_value(value: &'a Value) -> Result<Self, TypeError> {
        Ok(value)
    }
}

impl<'a> FromValue<'a> for bool {
    fn from_value(value: &'a Value) -> Result<Self, TypeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("bool", other)),
        }
    }
}

impl<'a> FromValue<'a> for i64 {
    fn from_value(value: &'a Value) -> Result<Self, TypeError> {
        match value {
            Value::Int(n) => Ok(*n),
            // Truncates toward zero, saturating at the i64 bounds.
            Value::Double(d) => Ok(*d as i64),
            other => Err(mismatch("number", other)),
        }
    }
}

impl<'a> FromValue<'a> for f64 {
    fn from_value(value: &'a Value) -> Result<Self, TypeError> {
        match value {
            Value::Int(n) => Ok(*n as f64),
            Value::Double(d) => Ok(*d),
            other => Err(mismatch("number", other)),
        }
    }
}

impl<'a> FromValue<'a> for &'a str {
    fn from_value(value: &'a Value) -> Result<Self, TypeError> {
        match value {
            Value::String(s) => Ok(s.as_str()),
            other => Err(mismatch("string", other)),
        }
    }
}

impl<'a> FromValue<'a> for &'a String {
    fn from_value(value: &'a Value) -> Result<Self, TypeError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch("string", other)),
        }
    }
}

impl<'a> FromValue<'a> for &'a [Value] {
    fn from_value(value: &'a Value) -> Result<Self, TypeError> {
        match value {
            Value::Array(arr) => Ok(arr.as_slice()),
            other => Err(mismatch("array", other)),
        }
    }
}

impl<'a> FromValue<'a> for &'a Vec<Value> {
    fn from_value(value: &'a Value) -> Result<Self, TypeError> {
        match value {
            Value::Array(arr) => Ok(arr),
            other => Err(mismatch("array", other)),
        }
    }
}

impl<'a> FromValue<'a> for &'a Map {
    fn from_value(value: &'a Value) -> Result<Self, TypeError> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(mismatch("object", other)),
        }
    }
}
