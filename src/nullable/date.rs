//! Calendar date wrapper kept as `YYYY-MM-DD` text.
//!
//! Components are parsed on every access. A zero year, month or day makes
//! the whole date the zero date, which binds as NULL but still marshals to
//! JSON as `"0000-00-00"`.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqltypes_core::{read_literal, DriverValue, Error, JsonLiteral, Result, Scanner, TextCodec, Valuer};
use std::fmt;
use tracing::debug;

/// Placeholder text of the zero date.
pub const ZERO_DATE: &str = "0000-00-00";

/// Calendar date stored as `YYYY-MM-DD` text.
#[derive(Debug, Clone)]
pub struct NullDate(pub String);

impl NullDate {
    /// Wrap raw text without validating it.
    pub fn new(v: impl Into<String>) -> Self {
        NullDate(v.into())
    }

    /// Build from calendar components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        NullDate(format!("{:04}-{:02}-{:02}", year, month, day))
    }

    /// The zero date.
    pub fn zero() -> Self {
        NullDate(ZERO_DATE.to_string())
    }

    /// The raw text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn component(&self, index: usize) -> Option<&str> {
        let date = self.0.trim().split([' ', 'T']).next()?;
        date.split('-').nth(index)
    }

    /// Year, or 0 when missing or unparsable.
    pub fn year(&self) -> i32 {
        self.component(0).and_then(|s| s.parse().ok()).unwrap_or(0)
    }

    /// Month (1-12), or 0 when missing or unparsable.
    pub fn month(&self) -> u32 {
        self.component(1).and_then(|s| s.parse().ok()).unwrap_or(0)
    }

    /// Day of month, or 0 when missing or unparsable.
    pub fn day(&self) -> u32 {
        self.component(2).and_then(|s| s.parse().ok()).unwrap_or(0)
    }

    /// Whether any component is zero.
    pub fn is_null(&self) -> bool {
        self.year() == 0 || self.month() == 0 || self.day() == 0
    }

    /// Zero-padded `YYYY-MM-DD` of the parsed components.
    pub fn to_ymd_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    /// The calendar date, if the components form one.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day())
    }
}

/// Parse a strict `YYYY-MM-DD` literal, allowing the zero date.
fn parse_date(s: &str) -> Result<NullDate> {
    let invalid = || Error::Parse(format!("invalid date literal {:?}", s));
    let mut parts = s.trim().split('-');
    let (y, m, d) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d), None)
            if [y, m, d]
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) =>
        {
            (y, m, d)
        }
        _ => return Err(invalid()),
    };
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    let day: u32 = d.parse().map_err(|_| invalid())?;

    let date = NullDate::from_ymd(year, month, day);
    if date.is_null() || NaiveDate::from_ymd_opt(year, month, day).is_some() {
        Ok(date)
    } else {
        Err(invalid())
    }
}

impl Default for NullDate {
    fn default() -> Self {
        NullDate::zero()
    }
}

impl PartialEq for NullDate {
    fn eq(&self, other: &Self) -> bool {
        (self.year(), self.month(), self.day()) == (other.year(), other.month(), other.day())
    }
}

impl Eq for NullDate {}

impl From<NaiveDate> for NullDate {
    fn from(d: NaiveDate) -> Self {
        NullDate::from_ymd(d.year(), d.month(), d.day())
    }
}

impl From<DateTime<Utc>> for NullDate {
    fn from(t: DateTime<Utc>) -> Self {
        NullDate::from(t.date_naive())
    }
}

impl From<&str> for NullDate {
    fn from(v: &str) -> Self {
        NullDate::new(v)
    }
}

impl fmt::Display for NullDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ymd_string())
    }
}

impl Scanner for NullDate {
    /// Never fails: values that are not a date become the zero date.
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        *self = match value {
            DriverValue::Null => NullDate::zero(),
            DriverValue::Timestamp(t) => NullDate::from(*t),
            DriverValue::Text(_) | DriverValue::Bytes(_) => {
                let text = match value {
                    DriverValue::Text(s) => Some(s.as_str()),
                    DriverValue::Bytes(b) => std::str::from_utf8(b).ok(),
                    _ => None,
                };
                match text.map(|s| s.trim()) {
                    Some(s) => parse_date(s)
                        .or_else(|_| sqltypes_core::convert::parse_timestamp(s).map(NullDate::from))
                        .unwrap_or_else(|_| {
                            debug!(value = s, "unrecognized date text, using zero date");
                            NullDate::zero()
                        }),
                    None => {
                        debug!("date bytes are not UTF-8, using zero date");
                        NullDate::zero()
                    }
                }
            }
            other => {
                debug!(kind = other.type_name(), "unsupported date value, using zero date");
                NullDate::zero()
            }
        };
        Ok(())
    }
}

impl Valuer for NullDate {
    fn value(&self) -> Result<DriverValue> {
        if self.is_null() {
            Ok(DriverValue::Null)
        } else {
            Ok(DriverValue::Text(self.to_ymd_string()))
        }
    }
}

impl TextCodec for NullDate {
    /// Always a quoted date, `"0000-00-00"` for the zero date.
    fn marshal_text(&self) -> Result<Vec<u8>> {
        Ok(sqltypes_core::text::quote(&self.to_ymd_string()))
    }

    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        match read_literal(text)? {
            JsonLiteral::Null => {}
            JsonLiteral::Quoted(s) => *self = parse_date(&s)?,
            JsonLiteral::Bare(_) => return Err(Error::conversion("JSON scalar", "NullDate")),
        }
        Ok(())
    }
}

impl Serialize for NullDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_ymd_string())
    }
}

impl<'de> Deserialize<'de> for NullDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => parse_date(&s).map_err(serde::de::Error::custom),
            None => Ok(NullDate::zero()),
        }
    }
}
