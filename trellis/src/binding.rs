//! Bound values.
//!
//! Widgets that edit a value (sliders, text fields, spinners) are bound to a
//! [`Value`] of a fixed [`ValueKind`]. Text coming back from an editor is
//! parsed in the binding's kind; storing a value of another kind is a
//! programming error and panics.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of a bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Int,
    Float,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BindingError {
    #[error("cannot parse {input:?} as {kind}")]
    Parse { kind: ValueKind, input: String },
}

/// A value a widget can display and edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Text shown in an editor. Floats use `precision` decimals.
    pub fn to_display(&self, precision: usize) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Float(v) => format!("{v:.precision$}"),
            Value::Text(v) => v.clone(),
        }
    }

    /// Parse editor text as a value of `kind`.
    ///
    /// Numbers are trimmed first; text is taken verbatim.
    pub fn parse(kind: ValueKind, input: &str) -> Result<Value, BindingError> {
        let err = || BindingError::Parse {
            kind,
            input: input.to_string(),
        };
        match kind {
            ValueKind::Int => input.trim().parse().map(Value::Int).map_err(|_| err()),
            ValueKind::Float => match input.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Value::Float(v)),
                _ => Err(err()),
            },
            ValueKind::Text => Ok(Value::Text(input.to_string())),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// Panic for a value stored into a binding of another kind.
#[track_caller]
pub(crate) fn kind_mismatch(name: &str, expected: ValueKind, got: ValueKind) -> ! {
    panic!("binding {name:?} holds {expected} values, cannot assign {got}")
}

/// A named value whose kind is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    name: String,
    value: Value,
}

impl Binding {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Replace the value.
    ///
    /// # Panics
    ///
    /// If `value` is of a different kind than the binding.
    #[track_caller]
    pub fn assign(&mut self, value: impl Into<Value>) {
        let value = value.into();
        if value.kind() != self.kind() {
            kind_mismatch(&self.name, self.kind(), value.kind());
        }
        self.value = value;
    }

    /// Parse `input` in the binding's kind and store it. On error the
    /// binding is unchanged.
    pub fn set_from_str(&mut self, input: &str) -> Result<(), BindingError> {
        self.value = Value::parse(self.kind(), input)?;
        Ok(())
    }

    pub fn to_display(&self, precision: usize) -> String {
        self.value.to_display(precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(-42).to_display(3), "-42");
        assert_eq!(Value::Float(1.0 / 3.0).to_display(2), "0.33");
        assert_eq!(Value::Float(2.0).to_display(0), "2");
        assert_eq!(Value::from("hi ").to_display(2), "hi ");
    }

    #[test]
    fn test_parse_by_kind() {
        assert_eq!(Value::parse(ValueKind::Int, " 17 "), Ok(Value::Int(17)));
        assert_eq!(Value::parse(ValueKind::Float, "0.5"), Ok(Value::Float(0.5)));
        assert_eq!(
            Value::parse(ValueKind::Text, " a b "),
            Ok(Value::Text(" a b ".into()))
        );
    }

    #[test]
    fn test_parse_errors() {
        let err = Value::parse(ValueKind::Int, "1.5").unwrap_err();
        assert_eq!(err.to_string(), "cannot parse \"1.5\" as int");
        assert!(Value::parse(ValueKind::Float, "abc").is_err());
        assert!(Value::parse(ValueKind::Float, "inf").is_err());
        assert!(Value::parse(ValueKind::Int, "").is_err());
    }

    #[test]
    fn test_binding_set_from_str() {
        let mut b = Binding::new("volume", 0.5);
        b.set_from_str("0.75").unwrap();
        assert_eq!(b.value(), &Value::Float(0.75));

        assert!(b.set_from_str("loud").is_err());
        assert_eq!(b.value(), &Value::Float(0.75));
        assert_eq!(b.to_display(1), "0.8");
    }

    #[test]
    fn test_assign_same_kind() {
        let mut b = Binding::new("count", 1i64);
        b.assign(5i64);
        assert_eq!(b.value().as_int(), Some(5));
    }

    #[test]
    #[should_panic(expected = "binding \"count\" holds int values, cannot assign text")]
    fn test_assign_wrong_kind_panics() {
        let mut b = Binding::new("count", 1i64);
        b.assign("five");
    }

    #[test]
    fn test_value_serde() {
        let json = serde_json::to_string(&Value::Int(3)).unwrap();
        assert_eq!(json, r#"{"kind":"int","value":3}"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Int(3));
    }
}
