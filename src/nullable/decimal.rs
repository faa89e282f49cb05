//! Decimal wrapper over [`CompactDecimal`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqltypes_core::{read_literal, DriverValue, JsonLiteral, Result, Scanner, TextCodec, Valuer};
use sqltypes_decimal::{CompactDecimal, Decimal};
use std::fmt;
use std::str::FromStr;

/// Fixed-point number stored in the compact decimal layout.
///
/// There is no NULL sentinel: a database NULL and a JSON `null` both leave
/// the current value unchanged, and binding always sends the decimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullDecimal(pub CompactDecimal);

impl NullDecimal {
    /// Wrap a compact decimal.
    pub fn new(v: CompactDecimal) -> Self {
        NullDecimal(v)
    }

    /// The wrapped compact decimal.
    pub fn get(&self) -> CompactDecimal {
        self.0
    }

    /// Decode to a full-precision decimal.
    pub fn to_decimal(&self) -> Decimal {
        self.0.to_decimal()
    }

    /// See [`CompactDecimal::to_fixed_string`].
    pub fn to_fixed_string(&self, places: i32) -> String {
        self.0.to_fixed_string(places)
    }

    /// Whether the value is numerically zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<CompactDecimal> for NullDecimal {
    fn from(v: CompactDecimal) -> Self {
        NullDecimal(v)
    }
}

impl From<Decimal> for NullDecimal {
    fn from(v: Decimal) -> Self {
        NullDecimal(CompactDecimal::from_decimal(&v))
    }
}

impl From<NullDecimal> for CompactDecimal {
    fn from(v: NullDecimal) -> Self {
        v.0
    }
}

impl FromStr for NullDecimal {
    type Err = sqltypes_core::Error;

    fn from_str(s: &str) -> Result<Self> {
        CompactDecimal::parse(s).map(NullDecimal)
    }
}

impl fmt::Display for NullDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Scanner for NullDecimal {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        if value.is_null() {
            return Ok(());
        }
        self.0.scan(value)
    }
}

impl Valuer for NullDecimal {
    fn value(&self) -> Result<DriverValue> {
        self.0.value()
    }
}

impl TextCodec for NullDecimal {
    fn marshal_text(&self) -> Result<Vec<u8>> {
        self.0.marshal_text()
    }

    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        if read_literal(text)? == JsonLiteral::Null {
            return Ok(());
        }
        self.0.unmarshal_text(text)
    }
}

impl Serialize for NullDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NullDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        CompactDecimal::deserialize(deserializer).map(NullDecimal)
    }
}
