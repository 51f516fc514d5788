//! Primitive values carried by field defaults.
//!
//! The [`Value`] enum holds the primitive a field default can take: a boolean,
//! an integer, a floating-point number, or a string. It serializes untagged so
//! that a default of `5` reads and writes as the bare JSON number `5`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A primitive default value.
///
/// # Examples
///
/// ```
/// use formschema_core::value::Value;
///
/// let v = Value::from(42_i64);
/// assert_eq!(v, Value::Int(42));
///
/// let v = Value::from("hello");
/// assert_eq!(v, Value::String("hello".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
}

/// The value every normalised accessor returns in place of "never set".
pub static EMPTY: Value = Value::String(String::new());

impl Value {
    /// Returns the OpenAPI primitive name for this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "number",
            Self::String(_) => "string",
        }
    }

    /// Returns the numeric value, if this is an integer or a float.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if this is the empty string.
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Self::String(s) if s.is_empty())
    }

    /// Converts this value into a `serde_json::Value`.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

// ── From implementations ───────────────────────────────────────────────

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7_i32), Value::Int(7));
        assert_eq!(Value::from(7_i64), Value::Int(7));
        assert_eq!(Value::from(1.5_f64), Value::Float(1.5));
        assert_eq!(Value::from(String::from("x")), Value::String("x".into()));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Bool(false).type_name(), "boolean");
        assert_eq!(Value::Int(1).type_name(), "integer");
        assert_eq!(Value::Float(1.0).type_name(), "number");
        assert_eq!(Value::String(String::new()).type_name(), "string");
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Bool(true).as_f64(), None);
        assert_eq!(Value::from("3").as_f64(), None);
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(EMPTY.is_empty_string());
        assert_eq!(EMPTY.to_string(), "");
        assert!(!Value::from("x").is_empty_string());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::from("hi").to_string(), "hi");
    }

    #[test]
    fn test_untagged_json() {
        assert_eq!(serde_json::to_string(&Value::Int(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::from_str::<Value>("5").unwrap(), Value::Int(5));
        assert_eq!(
            serde_json::from_str::<Value>("5.5").unwrap(),
            Value::Float(5.5)
        );
        assert_eq!(
            serde_json::from_str::<Value>("\"a\"").unwrap(),
            Value::from("a")
        );
    }

    #[test]
    fn test_to_json_non_finite() {
        assert_eq!(Value::Float(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(Value::Int(2).to_json(), serde_json::json!(2));
    }
}
