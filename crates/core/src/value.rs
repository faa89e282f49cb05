//! Driver value model
//!
//! This module defines [`DriverValue`], the closed set of representations a
//! database driver moves across its boundary. Every wrapper type scans from
//! and encodes to exactly these six variants.
//!
//! ## Contract
//!
//! - No implicit type coercions in equality
//! - IEEE-754 float equality semantics
//! - `Text` and `Bytes` are distinct kinds
//!
//! Coercions between kinds (text to integer, float to integer, ...) live in
//! [`crate::convert`] and are only applied when a wrapper scans a value.

use chrono::{DateTime, Utc};

/// A value as handed over by a database driver.
///
/// ## The Six Kinds
///
/// 1. `Null` - SQL NULL
/// 2. `Int` - 64-bit signed integer
/// 3. `Float` - 64-bit IEEE-754 floating point
/// 4. `Text` - UTF-8 encoded string
/// 5. `Bytes` - raw byte sequence
/// 6. `Timestamp` - native point in time
///
/// ## Equality Rules
///
/// - Different kinds are NEVER equal
/// - `Int(1)` != `Float(1.0)`
/// - `Text("abc")` != `Bytes([97, 98, 99])`
#[derive(Debug, Clone)]
pub enum DriverValue {
    /// SQL NULL
    Null,

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),

    /// UTF-8 encoded string
    Text(String),

    /// Raw bytes, decoded as UTF-8 by text-like wrappers
    Bytes(Vec<u8>),

    /// Point in time, always carried in UTC
    Timestamp(DateTime<Utc>),
}

impl DriverValue {
    /// Returns the kind name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            DriverValue::Null => "Null",
            DriverValue::Int(_) => "Int",
            DriverValue::Float(_) => "Float",
            DriverValue::Text(_) => "Text",
            DriverValue::Bytes(_) => "Bytes",
            DriverValue::Timestamp(_) => "Timestamp",
        }
    }

    /// Check if this value is SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DriverValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DriverValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DriverValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DriverValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as timestamp
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            DriverValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl PartialEq for DriverValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DriverValue::Null, DriverValue::Null) => true,
            (DriverValue::Int(a), DriverValue::Int(b)) => a == b,
            // IEEE-754 equality: NaN != NaN, but -0.0 == 0.0
            (DriverValue::Float(a), DriverValue::Float(b)) => a == b,
            (DriverValue::Text(a), DriverValue::Text(b)) => a == b,
            (DriverValue::Bytes(a), DriverValue::Bytes(b)) => a == b,
            (DriverValue::Timestamp(a), DriverValue::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for DriverValue {
    fn from(v: i64) -> Self {
        DriverValue::Int(v)
    }
}

impl From<f64> for DriverValue {
    fn from(v: f64) -> Self {
        DriverValue::Float(v)
    }
}

impl From<String> for DriverValue {
    fn from(v: String) -> Self {
        DriverValue::Text(v)
    }
}

impl From<&str> for DriverValue {
    fn from(v: &str) -> Self {
        DriverValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(v: Vec<u8>) -> Self {
        DriverValue::Bytes(v)
    }
}

impl From<DateTime<Utc>> for DriverValue {
    fn from(v: DateTime<Utc>) -> Self {
        DriverValue::Timestamp(v)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => DriverValue::Null,
        }
    }
}
