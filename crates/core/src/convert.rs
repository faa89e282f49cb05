//! Standard coercions between driver values and primitive types
//!
//! [`Decode`] turns a non-null [`DriverValue`] into a primitive using the
//! usual driver coercion rules (integers from integral floats or numeric
//! text, strings from bytes, ...). [`Encode`] is the reverse and always
//! produces the driver-native kind for the type.
//!
//! | Rust type | Decodes from | Encodes to |
//! |-----------|--------------|------------|
//! | `bool` | Int, Float, Text, Bytes | Int (0/1) |
//! | `i64` | Int, integral Float, Text, Bytes | Int |
//! | `u64` | non-negative Int/Float, Text, Bytes | Int (Conversion above `i64::MAX`) |
//! | `f64` | Float, Int, Text, Bytes | Float |
//! | `String` | Text, UTF-8 Bytes, Int, Float, Timestamp | Text |
//! | `Vec<u8>` | Bytes, Text | Bytes |
//! | `DateTime<Utc>` | Timestamp, Text, Bytes | Timestamp |
//! | `NaiveDate` | Timestamp, Text, Bytes | Text |
//!
//! Null never decodes; callers decide what NULL means for them.

use crate::error::{Error, Result};
use crate::value::DriverValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Textual timestamp form used on the driver boundary (no timezone).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Textual calendar date form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A primitive that can be built from a non-null driver value.
pub trait Decode: Sized {
    /// Target name used in conversion errors
    const TYPE_NAME: &'static str;

    /// Decode a non-null driver value.
    fn decode(value: &DriverValue) -> Result<Self>;
}

/// A primitive with a driver-native encoding.
pub trait Encode {
    /// Encode into the driver's representation.
    fn encode(&self) -> Result<DriverValue>;
}

fn mismatch<T: Decode>(value: &DriverValue) -> Error {
    Error::conversion(value.type_name(), T::TYPE_NAME)
}

/// Borrow text out of a Text or Bytes value, decoding bytes as UTF-8.
fn text_of<'a, T: Decode>(value: &'a DriverValue) -> Result<&'a str> {
    match value {
        DriverValue::Text(s) => Ok(s),
        DriverValue::Bytes(b) => std::str::from_utf8(b).map_err(|_| mismatch::<T>(value)),
        _ => Err(mismatch::<T>(value)),
    }
}

fn parse_number<N: std::str::FromStr>(s: &str, target: &str) -> Result<N> {
    s.trim()
        .parse::<N>()
        .map_err(|_| Error::Parse(format!("invalid {} literal {:?}", target, s)))
}

/// Parse the boolean spellings drivers commonly emit.
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        other => Err(Error::Parse(format!("invalid bool literal {:?}", other))),
    }
}

/// Parse `YYYY-MM-DD HH:MM:SS` (read as UTC), falling back to RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| Error::Parse(format!("invalid timestamp literal {:?}", s)))
}

impl Decode for bool {
    const TYPE_NAME: &'static str = "bool";

    fn decode(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Int(i) => Ok(*i != 0),
            DriverValue::Float(f) => Ok(*f != 0.0),
            DriverValue::Text(_) | DriverValue::Bytes(_) => parse_bool(text_of::<Self>(value)?),
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

impl Encode for bool {
    fn encode(&self) -> Result<DriverValue> {
        Ok(DriverValue::Int(i64::from(*self)))
    }
}

impl Decode for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn decode(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Int(i) => Ok(*i),
            DriverValue::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Ok(*f as i64)
                } else {
                    Err(Error::Parse(format!("invalid i64 literal {:?}", f)))
                }
            }
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                parse_number(text_of::<Self>(value)?, Self::TYPE_NAME)
            }
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

impl Encode for i64 {
    fn encode(&self) -> Result<DriverValue> {
        Ok(DriverValue::Int(*self))
    }
}

impl Decode for u64 {
    const TYPE_NAME: &'static str = "u64";

    fn decode(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Int(i) => u64::try_from(*i).map_err(|_| mismatch::<Self>(value)),
            DriverValue::Float(f) => {
                if f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64 {
                    Ok(*f as u64)
                } else {
                    Err(Error::Parse(format!("invalid u64 literal {:?}", f)))
                }
            }
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                parse_number(text_of::<Self>(value)?, Self::TYPE_NAME)
            }
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

impl Encode for u64 {
    /// Values above `i64::MAX` have no driver integer form.
    fn encode(&self) -> Result<DriverValue> {
        i64::try_from(*self)
            .map(DriverValue::Int)
            .map_err(|_| Error::conversion("u64", "Int"))
    }
}

impl Decode for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn decode(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Float(f) => Ok(*f),
            DriverValue::Int(i) => Ok(*i as f64),
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                parse_number(text_of::<Self>(value)?, Self::TYPE_NAME)
            }
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

impl Encode for f64 {
    fn encode(&self) -> Result<DriverValue> {
        Ok(DriverValue::Float(*self))
    }
}

impl Decode for String {
    const TYPE_NAME: &'static str = "String";

    fn decode(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                text_of::<Self>(value).map(str::to_string)
            }
            DriverValue::Int(i) => Ok(i.to_string()),
            DriverValue::Float(f) => Ok(f.to_string()),
            DriverValue::Timestamp(t) => Ok(t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            DriverValue::Null => Err(mismatch::<Self>(value)),
        }
    }
}

impl Encode for String {
    fn encode(&self) -> Result<DriverValue> {
        Ok(DriverValue::Text(self.clone()))
    }
}

impl Decode for Vec<u8> {
    const TYPE_NAME: &'static str = "Vec<u8>";

    fn decode(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Bytes(b) => Ok(b.clone()),
            DriverValue::Text(s) => Ok(s.as_bytes().to_vec()),
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

impl Encode for Vec<u8> {
    fn encode(&self) -> Result<DriverValue> {
        Ok(DriverValue::Bytes(self.clone()))
    }
}

impl Decode for DateTime<Utc> {
    const TYPE_NAME: &'static str = "DateTime<Utc>";

    fn decode(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Timestamp(t) => Ok(*t),
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                parse_timestamp(text_of::<Self>(value)?)
            }
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

impl Encode for DateTime<Utc> {
    fn encode(&self) -> Result<DriverValue> {
        Ok(DriverValue::Timestamp(*self))
    }
}

impl Decode for NaiveDate {
    const TYPE_NAME: &'static str = "NaiveDate";

    fn decode(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Timestamp(t) => Ok(t.date_naive()),
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                let s = text_of::<Self>(value)?.trim();
                NaiveDate::parse_from_str(s, DATE_FORMAT)
                    .map_err(|_| Error::Parse(format!("invalid date literal {:?}", s)))
            }
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

impl Encode for NaiveDate {
    fn encode(&self) -> Result<DriverValue> {
        Ok(DriverValue::Text(self.format(DATE_FORMAT).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    // ========================================================================
    // Integer Coercions
    // ========================================================================

    #[test]
    fn test_i64_from_int_float_and_text() {
        assert_eq!(i64::decode(&DriverValue::Int(-4)).unwrap(), -4);
        assert_eq!(i64::decode(&DriverValue::Float(12.0)).unwrap(), 12);
        assert_eq!(i64::decode(&DriverValue::from(" 42 ")).unwrap(), 42);
        assert_eq!(i64::decode(&DriverValue::Bytes(b"-7".to_vec())).unwrap(), -7);
    }

    #[test]
    fn test_i64_rejects_fraction_and_garbage() {
        assert!(i64::decode(&DriverValue::Float(1.5)).unwrap_err().is_parse());
        assert!(i64::decode(&DriverValue::from("abc")).unwrap_err().is_parse());
        assert!(i64::decode(&DriverValue::Timestamp(Utc::now()))
            .unwrap_err()
            .is_conversion());
        assert!(i64::decode(&DriverValue::Null).unwrap_err().is_conversion());
    }

    #[test]
    fn test_u64_rejects_negative() {
        assert_eq!(u64::decode(&DriverValue::Int(9)).unwrap(), 9);
        assert!(u64::decode(&DriverValue::Int(-1)).unwrap_err().is_conversion());
        assert_eq!(
            u64::decode(&DriverValue::from("18446744073709551615")).unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn test_u64_encode_range() {
        assert_eq!(7u64.encode().unwrap(), DriverValue::Int(7));
        assert!(u64::MAX.encode().unwrap_err().is_conversion());
    }

    // ========================================================================
    // Bool / Float
    // ========================================================================

    #[test]
    fn test_bool_spellings() {
        for s in ["1", "t", "TRUE", "True"] {
            assert!(bool::decode(&DriverValue::from(s)).unwrap());
        }
        for s in ["0", "f", "false", "FALSE"] {
            assert!(!bool::decode(&DriverValue::from(s)).unwrap());
        }
        assert!(bool::decode(&DriverValue::from("yes")).unwrap_err().is_parse());
        assert!(bool::decode(&DriverValue::Int(2)).unwrap());
        assert_eq!(true.encode().unwrap(), DriverValue::Int(1));
    }

    #[test]
    fn test_f64_from_int() {
        assert_eq!(f64::decode(&DriverValue::Int(3)).unwrap(), 3.0);
        assert_eq!(f64::decode(&DriverValue::from("2.5")).unwrap(), 2.5);
    }

    // ========================================================================
    // Strings and Bytes
    // ========================================================================

    #[test]
    fn test_string_from_bytes_requires_utf8() {
        assert_eq!(
            String::decode(&DriverValue::Bytes(b"hello".to_vec())).unwrap(),
            "hello"
        );
        assert!(String::decode(&DriverValue::Bytes(vec![0xff, 0xfe]))
            .unwrap_err()
            .is_conversion());
    }

    #[test]
    fn test_string_from_numbers() {
        assert_eq!(String::decode(&DriverValue::Int(100)).unwrap(), "100");
        assert_eq!(String::decode(&DriverValue::Float(1.25)).unwrap(), "1.25");
    }

    // ========================================================================
    // Time
    // ========================================================================

    #[test]
    fn test_timestamp_text_form() {
        let t = parse_timestamp("2021-06-30 13:45:10").unwrap();
        assert_eq!((t.year(), t.month(), t.day()), (2021, 6, 30));
        assert_eq!((t.hour(), t.minute(), t.second()), (13, 45, 10));
    }

    #[test]
    fn test_timestamp_rfc3339_fallback() {
        let t = parse_timestamp("2021-06-30T13:45:10+02:00").unwrap();
        assert_eq!(t.hour(), 11);
        assert!(parse_timestamp("30/06/2021").unwrap_err().is_parse());
    }

    #[test]
    fn test_naive_date_from_timestamp() {
        let t = Utc.with_ymd_and_hms(2010, 1, 10, 23, 0, 0).unwrap();
        let d = NaiveDate::decode(&DriverValue::Timestamp(t)).unwrap();
        assert_eq!(d.format(DATE_FORMAT).to_string(), "2010-01-10");
        assert_eq!(d.encode().unwrap(), DriverValue::from("2010-01-10"));
    }

    // ========================================================================
    // Property Tests
    // ========================================================================

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_i64_text_decodes_to_same_value(v in any::<i64>()) {
            prop_assert_eq!(i64::decode(&DriverValue::Text(v.to_string())).unwrap(), v);
        }

        #[test]
        fn prop_string_encode_decode(s in "\\PC*") {
            let encoded = s.encode().unwrap();
            prop_assert_eq!(String::decode(&encoded).unwrap(), s);
        }
    }
}
