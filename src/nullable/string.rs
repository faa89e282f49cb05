//! Text wrapper.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use sqltypes_core::text::quote;
use sqltypes_core::{read_literal, Decode, DriverValue, Result, Scanner, TextCodec, Valuer};
use std::fmt;

/// Text where the empty string means NULL.
///
/// JSON decoding keeps bare tokens as their literal text: `100` becomes
/// `"100"`. A JSON `null` handed to [`TextCodec::unmarshal_text`] leaves
/// the current value alone, while a database NULL resets it to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NullString(pub String);

impl NullString {
    /// Wrap a raw value.
    pub fn new(v: impl Into<String>) -> Self {
        NullString(v.into())
    }

    /// The raw text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the raw text.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the value is the NULL sentinel (`""`).
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for NullString {
    fn from(v: String) -> Self {
        NullString(v)
    }
}

impl From<&str> for NullString {
    fn from(v: &str) -> Self {
        NullString(v.to_string())
    }
}

impl From<NullString> for String {
    fn from(v: NullString) -> Self {
        v.0
    }
}

impl AsRef<str> for NullString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NullString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Scanner for NullString {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        self.0 = if value.is_null() {
            String::new()
        } else {
            String::decode(value)?
        };
        Ok(())
    }
}

impl Valuer for NullString {
    fn value(&self) -> Result<DriverValue> {
        if self.is_null() {
            Ok(DriverValue::Null)
        } else {
            Ok(DriverValue::Text(self.0.clone()))
        }
    }
}

impl TextCodec for NullString {
    fn marshal_text(&self) -> Result<Vec<u8>> {
        Ok(quote(&self.0))
    }

    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        if let Some(s) = read_literal(text)?.into_text() {
            self.0 = s;
        }
        Ok(())
    }
}

impl Serialize for NullString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Reads the raw JSON token so bare numbers keep their exact text
/// (`1.50` stays `"1.50"`). Requires a `serde_json` deserializer.
impl<'de> Deserialize<'de> for NullString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let literal =
            read_literal(raw.get().as_bytes()).map_err(<D::Error as de::Error>::custom)?;
        Ok(NullString(literal.into_text().unwrap_or_default()))
    }
}
