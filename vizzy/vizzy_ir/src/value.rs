//! Expression results.
//!
//! A `Value` carries exactly one populated variant. Consumers read the field
//! matching the producing expression's declared result kind; the accessors
//! below are deliberately permissive so that a mismatched read yields a
//! neutral value instead of failing, mirroring how the host language treats
//! expression results.
//!
//! # Result-kind contract
//!
//! An expression that reports `is_boolean() == true` must return
//! `Value::Bool`. This is an implementer contract and is not checked at
//! runtime.

use std::borrow::Cow;
use std::fmt;

/// A double-precision 3D vector as produced by the orbit model.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3d {
    /// The zero vector.
    pub const ZERO: Vector3d = Vector3d {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3d { x, y, z }
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Tag of a `Value` variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Number,
    Text,
    Bool,
    Vector,
    List,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Bool => "bool",
            ValueKind::Vector => "vector",
            ValueKind::List => "list",
        }
    }
}

/// Result of evaluating an expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Floating-point number.
    Number(f64),
    /// Text value.
    Text(String),
    /// Boolean value.
    Bool(bool),
    /// 3D vector.
    Vector(Vector3d),
    /// Ordered list of text items (the host language's list type).
    List(Vec<String>),
}

impl Value {
    /// The neutral numeric result used for fallbacks.
    pub const ZERO: Value = Value::Number(0.0);

    /// Create a text value.
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Create a list value.
    #[inline]
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Create a vector value.
    #[inline]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Value::Vector(Vector3d::new(x, y, z))
    }

    /// The variant tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Text(_) => ValueKind::Text,
            Value::Bool(_) => ValueKind::Bool,
            Value::Vector(_) => ValueKind::Vector,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Read as a number.
    ///
    /// Booleans read as 1/0 and text is parsed; anything else reads as 0.
    pub fn number_value(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Text(s) => s.trim().parse().unwrap_or(0.0),
            Value::Vector(_) | Value::List(_) => 0.0,
        }
    }

    /// Read as text.
    pub fn text_value(&self) -> Cow<'_, str> {
        match self {
            Value::Text(s) => Cow::Borrowed(s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Vector(v) => Cow::Owned(v.to_string()),
            Value::List(items) => Cow::Owned(items.join(",")),
        }
    }

    /// Read as a boolean.
    pub fn bool_value(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::Text(s) => s.trim().eq_ignore_ascii_case("true"),
            Value::Vector(_) | Value::List(_) => false,
        }
    }

    /// Read as a vector; non-vectors read as the zero vector.
    pub fn vector_value(&self) -> Vector3d {
        match self {
            Value::Vector(v) => *v,
            _ => Vector3d::ZERO,
        }
    }

    /// Read as a list; text reads as a one-element list.
    pub fn list_value(&self) -> Cow<'_, [String]> {
        match self {
            Value::List(items) => Cow::Borrowed(items),
            Value::Text(s) => Cow::Owned(vec![s.clone()]),
            _ => Cow::Owned(Vec::new()),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_value())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vector3d> for Value {
    fn from(v: Vector3d) -> Self {
        Value::Vector(v)
    }
}

#[cfg(test)]
mod tests;
