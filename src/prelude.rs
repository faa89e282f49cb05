//! Convenient imports for sqltypes.
//!
//! ```
//! use sqltypes::prelude::*;
//!
//! let d = NullDate::new("2018-03-09");
//! assert_eq!(d.value().unwrap(), DriverValue::Text("2018-03-09".into()));
//! ```

// Protocols
pub use sqltypes_core::{Scanner, TextCodec, Valuer};

// Error handling
pub use sqltypes_core::{Error, Result};

// Values
pub use sqltypes_core::DriverValue;
pub use sqltypes_decimal::CompactDecimal;

// Wrappers
pub use crate::nullable::{
    NullBool, NullDate, NullDecimal, NullFloat, NullInt0, NullIntM1, NullString, NullTime,
    NullUint,
};

pub use crate::parse_locale_decimal;
