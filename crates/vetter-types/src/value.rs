//! Runtime classification of candidate data.
//!
//! Data is plain `serde_json::Value`. There is no separate "undefined": a
//! missing value and JSON `null` are both `Value::Null`.

use std::fmt;

use serde_json::Value;

static NULL: Value = Value::Null;

/// Runtime type of a data value, compared by name against a schema's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Array,
    Object,
    String,
    Number,
    Boolean,
    Null,
}

impl DataType {
    /// Classify a value.
    ///
    /// Arrays are detected by duck typing: a JSON array, *or* an object with
    /// a `length` member that coerces to a number, classifies as `Array`. So
    /// `{"length": 2}` and `{"length": "3"}` are arrays here while
    /// `{"length": "many"}` is an object. This is the one place that rule
    /// lives.
    pub fn of(value: &Value) -> DataType {
        match value {
            Value::Array(_) => DataType::Array,
            Value::Object(map) => match map.get("length") {
                Some(length) if coerces_to_number(length) => DataType::Array,
                _ => DataType::Object,
            },
            Value::String(_) => DataType::String,
            Value::Number(_) => DataType::Number,
            Value::Bool(_) => DataType::Boolean,
            Value::Null => DataType::Null,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Array => "array",
            DataType::Object => "object",
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Null => "null",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a `length` member would coerce to a number (not NaN).
///
/// Numbers, booleans and `null` always do. Strings do when blank, numeric,
/// a `0x`/`0o`/`0b` literal, or `Infinity`. Arrays do when empty or holding
/// a single coercible scalar. Objects never do.
fn coerces_to_number(value: &Value) -> bool {
    match value {
        Value::Number(_) | Value::Bool(_) | Value::Null => true,
        Value::String(s) => numeric_string(s),
        Value::Array(items) => match items.as_slice() {
            [] => true,
            [Value::Null] | [Value::Number(_)] => true,
            [Value::String(s)] => numeric_string(s),
            [nested @ Value::Array(_)] => coerces_to_number(nested),
            _ => false,
        },
        Value::Object(_) => false,
    }
}

fn numeric_string(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return true;
    }
    if matches!(s, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let (Some(radix), Some(digits)) = (radix, s.get(2..)) {
        return u128::from_str_radix(digits, radix).is_ok();
    }
    // Rust accepts "inf" and "nan"; those are not numbers here.
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return false;
    }
    s.parse::<f64>().is_ok()
}

/// Truthiness: `null`, `false`, `0` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Length of a value that has one: strings (in UTF-16 code units, so an
/// astral character such as an emoji counts as 2), arrays (element count),
/// and array-like objects whose `length` member is a whole non-negative
/// number or numeric string.
pub fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.encode_utf16().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => map.get("length").and_then(declared_length),
        _ => None,
    }
}

fn declared_length(length: &Value) -> Option<usize> {
    match length {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    }
}

/// Look up `name` on a value: object member, or array element when `name`
/// is an index. Anything else is `null`.
pub fn field_of<'a>(value: &'a Value, name: &str) -> &'a Value {
    match value {
        Value::Object(map) => map.get(name).unwrap_or(&NULL),
        Value::Array(items) => name
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index))
            .unwrap_or(&NULL),
        _ => &NULL,
    }
}
