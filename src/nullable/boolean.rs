//! Boolean wrapper stored as a 0/1 integer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqltypes_core::convert::parse_bool;
use sqltypes_core::{read_literal, Decode, DriverValue, JsonLiteral, Result, Scanner, TextCodec, Valuer};
use std::fmt;

/// Boolean where `false` means NULL.
///
/// Binds as integer `1`; `false` binds as NULL. Scans integers, floats and
/// the usual textual spellings (`1`, `t`, `true`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullBool(pub bool);

impl NullBool {
    /// Wrap a raw value.
    pub fn new(v: bool) -> Self {
        NullBool(v)
    }

    /// The raw value.
    pub fn get(&self) -> bool {
        self.0
    }

    /// Whether the value is the NULL sentinel (`false`).
    pub fn is_null(&self) -> bool {
        !self.0
    }
}

impl From<bool> for NullBool {
    fn from(v: bool) -> Self {
        NullBool(v)
    }
}

impl From<NullBool> for bool {
    fn from(v: NullBool) -> Self {
        v.0
    }
}

impl fmt::Display for NullBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Scanner for NullBool {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        self.0 = !value.is_null() && bool::decode(value)?;
        Ok(())
    }
}

impl Valuer for NullBool {
    fn value(&self) -> Result<DriverValue> {
        if self.0 {
            Ok(DriverValue::Int(1))
        } else {
            Ok(DriverValue::Null)
        }
    }
}

impl TextCodec for NullBool {
    fn marshal_text(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.0)?)
    }

    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        match read_literal(text)? {
            JsonLiteral::Null => {}
            JsonLiteral::Quoted(s) | JsonLiteral::Bare(s) => self.0 = parse_bool(&s)?,
        }
        Ok(())
    }
}

impl Serialize for NullBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.0)
    }
}

impl<'de> Deserialize<'de> for NullBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(NullBool(Option::<bool>::deserialize(deserializer)?.unwrap_or(false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_integer() {
        assert_eq!(NullBool(true).value().unwrap(), DriverValue::Int(1));
        assert_eq!(NullBool(false).value().unwrap(), DriverValue::Null);
    }

    #[test]
    fn test_scan() {
        let mut b = NullBool(true);
        b.scan(&DriverValue::Null).unwrap();
        assert!(!b.get());

        b.scan(&DriverValue::Int(1)).unwrap();
        assert!(b.get());
        b.scan(&DriverValue::Int(0)).unwrap();
        assert!(!b.get());
        b.scan(&DriverValue::from("true")).unwrap();
        assert!(b.get());
        assert!(b.scan(&DriverValue::from("maybe")).unwrap_err().is_parse());
    }

    #[test]
    fn test_text() {
        let mut b = NullBool(true);
        b.unmarshal_text(b"null").unwrap();
        assert!(b.get());
        b.unmarshal_text(b"false").unwrap();
        assert!(!b.get());
        assert_eq!(NullBool(true).marshal_text().unwrap(), b"true".to_vec());
    }

    #[test]
    fn test_serde() {
        let b: NullBool = serde_json::from_str("null").unwrap();
        assert!(b.is_null());
        assert_eq!(serde_json::to_string(&NullBool(true)).unwrap(), "true");
    }
}
