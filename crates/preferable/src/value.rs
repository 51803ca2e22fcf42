//! Preference value types.
//!
//! This module defines the runtime representation of preference values as
//! they travel through accessors and live inside the stored preferences blob.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier-like atom (e.g. `one`, `dark_mode`).
///
/// Symbols compare by name but stay distinct from strings, so a stored
/// `Symbol("one")` is not equal to `String("one")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

/// The scalar kind of a [`PrefValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    Boolean,
    Integer,
    Float,
    Symbol,
}

/// Runtime representation of a preference value.
///
/// The absent marker is `Option::None` at every API boundary; there is no
/// "null" variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PrefValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Symbol(Symbol),
}

impl PrefValue {
    /// Shorthand for `PrefValue::Symbol(Symbol::new(name))`.
    pub fn symbol(name: impl Into<String>) -> Self {
        PrefValue::Symbol(Symbol::new(name))
    }

    pub fn kind(&self) -> ScalarType {
        match self {
            PrefValue::String(_) => ScalarType::String,
            PrefValue::Boolean(_) => ScalarType::Boolean,
            PrefValue::Integer(_) => ScalarType::Integer,
            PrefValue::Float(_) => ScalarType::Float,
            PrefValue::Symbol(_) => ScalarType::Symbol,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrefValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PrefValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PrefValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            PrefValue::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PrefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefValue::String(s) => f.write_str(s),
            PrefValue::Boolean(b) => write!(f, "{}", b),
            PrefValue::Integer(i) => write!(f, "{}", i),
            // Integral floats keep a fractional digit or an exponent so `3.0`
            // never reads as an integer.
            PrefValue::Float(x) if x.is_finite() && x.abs() >= 1e16 => write!(f, "{:e}", x),
            PrefValue::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            PrefValue::Float(x) => write!(f, "{}", x),
            PrefValue::Symbol(s) => f.write_str(s.as_str()),
        }
    }
}

impl From<&str> for PrefValue {
    fn from(value: &str) -> Self {
        PrefValue::String(value.to_string())
    }
}

impl From<String> for PrefValue {
    fn from(value: String) -> Self {
        PrefValue::String(value)
    }
}

impl From<bool> for PrefValue {
    fn from(value: bool) -> Self {
        PrefValue::Boolean(value)
    }
}

impl From<i64> for PrefValue {
    fn from(value: i64) -> Self {
        PrefValue::Integer(value)
    }
}

impl From<i32> for PrefValue {
    fn from(value: i32) -> Self {
        PrefValue::Integer(i64::from(value))
    }
}

impl From<f64> for PrefValue {
    fn from(value: f64) -> Self {
        PrefValue::Float(value)
    }
}

impl From<Symbol> for PrefValue {
    fn from(value: Symbol) -> Self {
        PrefValue::Symbol(value)
    }
}
