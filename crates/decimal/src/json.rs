//! JSON bridging for [`CompactDecimal`]
//!
//! Marshals as a quoted decimal string (`"43.4"`), or with the `json-number`
//! feature as a bare number literal with the same digits (`43.4`). The bare
//! form goes through `serde_json`'s raw value, so it is only meaningful for
//! JSON serializers. Unmarshaling accepts quoted strings, bare
//! numbers and `null`. Every decode starts from a fresh zero, so `null`
//! resets the value to zero.

use crate::codec::CompactDecimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use sqltypes_core::{read_literal, JsonLiteral, Result, TextCodec};
use std::fmt;

impl Serialize for CompactDecimal {
    #[cfg(not(feature = "json-number"))]
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }

    /// Bare number literal carrying the exact decimal text.
    #[cfg(feature = "json-number")]
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde_json::value::RawValue::from_string(self.to_string())
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}

struct CompactDecimalVisitor;

impl<'de> Visitor<'de> for CompactDecimalVisitor {
    type Value = CompactDecimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        CompactDecimal::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        Ok(CompactDecimal::new(v, 0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        match i64::try_from(v) {
            Ok(v) => Ok(CompactDecimal::new(v, 0)),
            Err(_) => CompactDecimal::parse(&v.to_string()).map_err(E::custom),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
        CompactDecimal::from_f64(v).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(CompactDecimal::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(CompactDecimal::ZERO)
    }
}

impl<'de> Deserialize<'de> for CompactDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CompactDecimalVisitor)
    }
}

impl TextCodec for CompactDecimal {
    fn marshal_text(&self) -> Result<Vec<u8>> {
        if cfg!(feature = "json-number") {
            Ok(self.to_string().into_bytes())
        } else {
            Ok(sqltypes_core::text::quote(&self.to_string()))
        }
    }

    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        *self = match read_literal(text)? {
            JsonLiteral::Null => CompactDecimal::ZERO,
            JsonLiteral::Quoted(s) | JsonLiteral::Bare(s) => CompactDecimal::parse(&s)?,
        };
        Ok(())
    }
}
