//! Kind classification for parsed JSON values.
//!
//! Documents are held as [`serde_json::Value`] built with `preserve_order`, so
//! object entries iterate in the order their keys appeared in the source text.
//! Every algorithm in this crate agrees on the six kinds below; arrays and
//! objects are both compound but are never treated interchangeably.

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// The kind of a JSON value. Exactly one applies to every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Null => JsonKind::Null,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// Leaves: string, number, boolean and null.
    pub fn is_scalar(self) -> bool {
        !self.is_compound()
    }

    pub fn is_compound(self) -> bool {
        matches!(self, JsonKind::Array | JsonKind::Object)
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Boolean => "boolean",
            JsonKind::Null => "null",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A borrowed view of a leaf value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    String(&'a str),
    Number(&'a Number),
    Boolean(bool),
    Null,
}

impl<'a> Scalar<'a> {
    /// Returns the scalar view of `value`, or `None` for arrays and objects.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Scalar::String(s)),
            Value::Number(n) => Some(Scalar::Number(n)),
            Value::Bool(b) => Some(Scalar::Boolean(*b)),
            Value::Null => Some(Scalar::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn kind(&self) -> JsonKind {
        match self {
            Scalar::String(_) => JsonKind::String,
            Scalar::Number(_) => JsonKind::Number,
            Scalar::Boolean(_) => JsonKind::Boolean,
            Scalar::Null => JsonKind::Null,
        }
    }

    /// Canonical text of the leaf.
    ///
    /// Strings are returned as-is (unescaped), `null` as `"null"`, booleans as
    /// `"true"`/`"false"`. Integers print in decimal; floats use the shortest
    /// representation that round-trips, so `3.0` prints as `"3"` and `-0.0`
    /// as `"0"`.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::String(s) => (*s).to_string(),
            Scalar::Number(n) => number_text(n),
            Scalar::Boolean(b) => b.to_string(),
            Scalar::Null => "null".to_string(),
        }
    }

    /// Rebuild an owned [`Value`] from this view.
    pub fn to_value(&self) -> Value {
        match self {
            Scalar::String(s) => Value::String((*s).to_string()),
            Scalar::Number(n) => Value::Number((*n).clone()),
            Scalar::Boolean(b) => Value::Bool(*b),
            Scalar::Null => Value::Null,
        }
    }
}

fn number_text(n: &Number) -> String {
    if n.is_f64() {
        match n.as_f64() {
            // Negative zero prints as "0".
            Some(f) if f == 0.0 => "0".to_string(),
            Some(f) => format!("{}", f),
            None => n.to_string(),
        }
    } else {
        n.to_string()
    }
}

