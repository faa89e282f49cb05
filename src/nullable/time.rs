//! Timestamp wrapper.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqltypes_core::{
    read_literal, Decode, DriverValue, Error, JsonLiteral, Result, Scanner, TextCodec, Valuer,
};
use std::fmt;

/// The zero instant, `0001-01-01T00:00:00Z`.
pub fn zero_time() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Point in time where the zero instant means NULL.
///
/// Scans native timestamps and `YYYY-MM-DD HH:MM:SS` text (read as UTC).
/// JSON uses RFC 3339; a JSON `null` handed to
/// [`TextCodec::unmarshal_text`] leaves the current value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NullTime(pub DateTime<Utc>);

impl NullTime {
    /// Wrap a raw value.
    pub fn new(v: DateTime<Utc>) -> Self {
        NullTime(v)
    }

    /// The current time.
    pub fn now() -> Self {
        NullTime(Utc::now())
    }

    /// The raw instant.
    pub fn get(&self) -> DateTime<Utc> {
        self.0
    }

    /// Whether the value is the zero instant.
    pub fn is_null(&self) -> bool {
        self.0 == zero_time()
    }
}

impl Default for NullTime {
    fn default() -> Self {
        NullTime(zero_time())
    }
}

impl From<DateTime<Utc>> for NullTime {
    fn from(v: DateTime<Utc>) -> Self {
        NullTime(v)
    }
}

impl From<NullTime> for DateTime<Utc> {
    fn from(v: NullTime) -> Self {
        v.0
    }
}

impl fmt::Display for NullTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Scanner for NullTime {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        self.0 = if value.is_null() {
            zero_time()
        } else {
            DateTime::<Utc>::decode(value)?
        };
        Ok(())
    }
}

impl Valuer for NullTime {
    fn value(&self) -> Result<DriverValue> {
        if self.is_null() {
            Ok(DriverValue::Null)
        } else {
            Ok(DriverValue::Timestamp(self.0))
        }
    }
}

impl TextCodec for NullTime {
    fn marshal_text(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.0)?)
    }

    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        match read_literal(text)? {
            JsonLiteral::Null => {}
            JsonLiteral::Quoted(s) => {
                self.0 = DateTime::parse_from_rfc3339(&s)
                    .map_err(|e| Error::Parse(format!("invalid timestamp {:?}: {}", s, e)))?
                    .with_timezone(&Utc);
            }
            JsonLiteral::Bare(_) => return Err(Error::conversion("JSON scalar", "NullTime")),
        }
        Ok(())
    }
}

impl Serialize for NullTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NullTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?
            .map(NullTime)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_zero_is_null() {
        let t = NullTime::default();
        assert!(t.is_null());
        assert_eq!(t.value().unwrap(), DriverValue::Null);
        assert_eq!(t.0.year(), 1);
    }

    #[test]
    fn test_value_is_timestamp() {
        let at = Utc.with_ymd_and_hms(2022, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(NullTime(at).value().unwrap(), DriverValue::Timestamp(at));
    }

    #[test]
    fn test_scan_text_form() {
        let mut t = NullTime::default();
        t.scan(&DriverValue::from("2013-09-25 17:30:00")).unwrap();
        assert_eq!((t.0.year(), t.0.month(), t.0.day()), (2013, 9, 25));
        assert_eq!(t.0.hour(), 17);

        t.scan(&DriverValue::Null).unwrap();
        assert!(t.is_null());

        assert!(t.scan(&DriverValue::Int(5)).unwrap_err().is_conversion());
        assert!(t.scan(&DriverValue::from("yesterday")).unwrap_err().is_parse());
    }

    #[test]
    fn test_text_roundtrip() {
        let at = Utc.with_ymd_and_hms(2019, 7, 22, 10, 0, 0).unwrap();
        let text = NullTime(at).marshal_text().unwrap();
        assert_eq!(text, br#""2019-07-22T10:00:00Z""#.to_vec());

        let mut t = NullTime::default();
        t.unmarshal_text(&text).unwrap();
        assert_eq!(t.0, at);

        t.unmarshal_text(b"null").unwrap();
        assert_eq!(t.0, at);
    }

    #[test]
    fn test_zero_marshals_as_instant() {
        let text = NullTime::default().marshal_text().unwrap();
        assert_eq!(text, br#""0001-01-01T00:00:00Z""#.to_vec());
    }

    #[test]
    fn test_serde_null_is_zero() {
        let t: NullTime = serde_json::from_str("null").unwrap();
        assert!(t.is_null());
    }
}
