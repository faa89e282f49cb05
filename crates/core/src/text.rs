//! JSON text boundary
//!
//! [`TextCodec`] works on the raw JSON text of a single value, the way a
//! field-level (un)marshaler does. Unlike `serde::Deserialize`, which always
//! builds a fresh value, `unmarshal_text` mutates the receiver in place, so a
//! JSON `null` can leave an existing value untouched.
//!
//! [`read_literal`] splits raw text into the three shapes wrappers care
//! about: `null`, a quoted string, or a bare scalar token kept verbatim.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Field-level JSON text (un)marshaling.
pub trait TextCodec {
    /// Render the receiver as JSON text.
    fn marshal_text(&self) -> Result<Vec<u8>>;

    /// Update the receiver from JSON text.
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()>;
}

/// One JSON scalar, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonLiteral {
    /// `null`
    Null,
    /// A quoted string, unescaped
    Quoted(String),
    /// A bare number or boolean token, exactly as written
    Bare(String),
}

impl JsonLiteral {
    /// The literal's text, `None` for `null`.
    pub fn into_text(self) -> Option<String> {
        match self {
            JsonLiteral::Null => None,
            JsonLiteral::Quoted(s) | JsonLiteral::Bare(s) => Some(s),
        }
    }
}

/// Classify the JSON text of a single scalar.
///
/// Arrays and objects are rejected with a conversion error; anything that is
/// not valid JSON is a serialization error.
pub fn read_literal(text: &[u8]) -> Result<JsonLiteral> {
    let raw = std::str::from_utf8(text)
        .map_err(|e| Error::Serialization(e.to_string()))?
        .trim();

    match serde_json::from_str::<serde_json::Value>(raw)? {
        serde_json::Value::Null => Ok(JsonLiteral::Null),
        serde_json::Value::String(s) => Ok(JsonLiteral::Quoted(s)),
        serde_json::Value::Number(_) | serde_json::Value::Bool(_) => {
            Ok(JsonLiteral::Bare(raw.to_string()))
        }
        serde_json::Value::Array(_) => Err(Error::conversion("JSON array", "scalar")),
        serde_json::Value::Object(_) => Err(Error::conversion("JSON object", "scalar")),
    }
}

/// Quote and escape `s` as a JSON string.
pub fn quote(s: &str) -> Vec<u8> {
    // Serializing a str into JSON cannot fail.
    serde_json::to_vec(s).unwrap_or_else(|_| b"\"\"".to_vec())
}

/// `None` is `null`; anything else goes through serde.
impl<T: Serialize + DeserializeOwned> TextCodec for Option<T> {
    fn marshal_text(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        *self = serde_json::from_slice(text)?;
        Ok(())
    }
}
