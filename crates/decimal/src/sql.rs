//! Driver bridging for [`CompactDecimal`]
//!
//! Scanning accepts integers, floats and decimal text (optionally quoted);
//! NULL and timestamps are rejected. Binding always sends the decimal text.

use crate::codec::CompactDecimal;
use sqltypes_core::{DriverValue, Error, Result, Scanner, Valuer};

fn unquote(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

impl Scanner for CompactDecimal {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        *self = match value {
            DriverValue::Int(i) => CompactDecimal::new(*i, 0),
            DriverValue::Float(f) => CompactDecimal::from_f64(*f)?,
            DriverValue::Text(s) => CompactDecimal::parse(unquote(s))?,
            DriverValue::Bytes(b) => {
                let s = std::str::from_utf8(b)
                    .map_err(|_| Error::conversion(value.type_name(), "CompactDecimal"))?;
                CompactDecimal::parse(unquote(s))?
            }
            DriverValue::Null | DriverValue::Timestamp(_) => {
                return Err(Error::conversion(value.type_name(), "CompactDecimal"))
            }
        };
        Ok(())
    }
}

impl Valuer for CompactDecimal {
    fn value(&self) -> Result<DriverValue> {
        Ok(DriverValue::Text(self.to_string()))
    }
}
