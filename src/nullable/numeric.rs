//! Integer and float wrappers.
//!
//! | Type | Repr | Null sentinel | Driver out |
//! |------|------|---------------|------------|
//! | [`NullInt0`] | `i64` | `0` | `Int` |
//! | [`NullIntM1`] | `i64` | `-1` | `Int` |
//! | [`NullUint`] | `u64` | `0` | `Int` |
//! | [`NullFloat`] | `f64` | `0.0` | `Float` |
//!
//! A stored sentinel cannot be told apart from NULL. Use [`NullIntM1`] when
//! zero is a meaningful value, or `Option<i64>` when every value is.

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqltypes_core::{
    read_literal, Decode, DriverValue, Encode, Error, JsonLiteral, Result, Scanner, TextCodec,
    Valuer,
};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Representations a numeric wrapper can be read into from JSON.
trait JsonNumber: Sized + FromStr {
    fn from_i64(v: i64) -> Option<Self>;
    fn from_u64(v: u64) -> Option<Self>;
    fn from_f64(v: f64) -> Option<Self>;
}

impl JsonNumber for i64 {
    fn from_i64(v: i64) -> Option<Self> {
        Some(v)
    }

    fn from_u64(v: u64) -> Option<Self> {
        i64::try_from(v).ok()
    }

    fn from_f64(_: f64) -> Option<Self> {
        None
    }
}

impl JsonNumber for u64 {
    fn from_i64(v: i64) -> Option<Self> {
        u64::try_from(v).ok()
    }

    fn from_u64(v: u64) -> Option<Self> {
        Some(v)
    }

    fn from_f64(_: f64) -> Option<Self> {
        None
    }
}

impl JsonNumber for f64 {
    fn from_i64(v: i64) -> Option<Self> {
        Some(v as f64)
    }

    fn from_u64(v: u64) -> Option<Self> {
        Some(v as f64)
    }

    fn from_f64(v: f64) -> Option<Self> {
        Some(v)
    }
}

/// Accepts a bare number, a quoted number or `null` (`None`), matching
/// what `unmarshal_text` accepts.
struct NumberVisitor<T>(PhantomData<T>);

impl<'de, T: JsonNumber> Visitor<'de> for NumberVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a quoted number or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        T::from_i64(v)
            .map(Some)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        T::from_u64(v)
            .map(Some)
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
        T::from_f64(v)
            .map(Some)
            .ok_or_else(|| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        v.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }
}

macro_rules! sentinel_number {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $sentinel:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(pub $repr);

        impl $name {
            /// Value standing for NULL.
            pub const NULL: $name = $name($sentinel);

            /// Wrap a raw value.
            pub fn new(v: $repr) -> Self {
                $name(v)
            }

            /// The raw value, sentinel included.
            pub fn get(&self) -> $repr {
                self.0
            }

            /// Whether the value is the NULL sentinel.
            pub fn is_null(&self) -> bool {
                self.0 == $sentinel
            }

            /// `None` for the sentinel, the value otherwise.
            pub fn to_option(&self) -> Option<$repr> {
                if self.is_null() {
                    None
                } else {
                    Some(self.0)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::NULL
            }
        }

        impl From<$repr> for $name {
            fn from(v: $repr) -> Self {
                $name(v)
            }
        }

        impl From<$name> for $repr {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl From<Option<$repr>> for $name {
            fn from(v: Option<$repr>) -> Self {
                v.map_or(Self::NULL, $name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Scanner for $name {
            fn scan(&mut self, value: &DriverValue) -> Result<()> {
                self.0 = if value.is_null() {
                    $sentinel
                } else {
                    <$repr>::decode(value)?
                };
                Ok(())
            }
        }

        impl Valuer for $name {
            fn value(&self) -> Result<DriverValue> {
                if self.is_null() {
                    Ok(DriverValue::Null)
                } else {
                    self.0.encode()
                }
            }
        }

        impl TextCodec for $name {
            fn marshal_text(&self) -> Result<Vec<u8>> {
                Ok(serde_json::to_vec(&self.0)?)
            }

            /// `null` keeps the current value; quoted numbers are accepted.
            fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
                match read_literal(text)? {
                    JsonLiteral::Null => {}
                    JsonLiteral::Quoted(s) | JsonLiteral::Bare(s) => {
                        self.0 = s.trim().parse::<$repr>().map_err(|_| {
                            Error::Parse(format!(
                                "invalid {} literal {:?}",
                                stringify!($repr),
                                s
                            ))
                        })?;
                    }
                }
                Ok(())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                deserializer
                    .deserialize_any(NumberVisitor::<$repr>(PhantomData))
                    .map(Self::from)
            }
        }
    };
}

sentinel_number!(
    /// Signed integer where `0` means NULL.
    NullInt0,
    i64,
    0
);

sentinel_number!(
    /// Signed integer where `-1` means NULL.
    NullIntM1,
    i64,
    -1
);

sentinel_number!(
    /// Unsigned integer where `0` means NULL.
    ///
    /// Binding a value above `i64::MAX` fails with a conversion error.
    NullUint,
    u64,
    0
);

sentinel_number!(
    /// Float where `0.0` means NULL.
    NullFloat,
    f64,
    0.0
);

impl Eq for NullInt0 {}
impl Eq for NullIntM1 {}
impl Eq for NullUint {}
