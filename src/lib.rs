//! # sqltypes
//!
//! Nullable scalar types that sit between a SQL driver and JSON.
//!
//! Every wrapper implements two protocols:
//!
//! - [`Scanner`] / [`Valuer`]: read from and bind to a [`DriverValue`]
//! - [`TextCodec`] (plus `serde`): read from and write to JSON text
//!
//! NULL is an in-band sentinel of the wrapped type (see [`nullable`]).
//! Decimals are kept in the fixed 15-byte [`CompactDecimal`] layout.
//!
//! ## Quick Start
//!
//! ```
//! use sqltypes::prelude::*;
//!
//! let mut id = NullIntM1::default();
//! id.scan(&DriverValue::Int(0)).unwrap();
//! assert!(!id.is_null());
//!
//! let mut name = NullString::from("kept");
//! name.unmarshal_text(b"null").unwrap();
//! assert_eq!(name.as_str(), "kept");
//! ```

#![warn(missing_docs)]

mod locale;
pub mod nullable;

pub mod prelude;

pub use locale::parse_locale_decimal;
pub use nullable::*;

// Re-export the building blocks
pub use sqltypes_core::{
    Decode, DriverValue, Encode, Error, JsonLiteral, Result, Scanner, TextCodec, Valuer,
};
pub use sqltypes_decimal::{format_fixed, CompactDecimal, Decimal};
