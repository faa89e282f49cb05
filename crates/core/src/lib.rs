//! Core types for sqltypes
//!
//! This crate defines what every nullable wrapper and the compact decimal
//! build on:
//! - [`DriverValue`]: the closed set of values a database driver exchanges
//! - [`Error`]: the single error type of the workspace
//! - [`Scanner`] / [`Valuer`]: the database boundary protocols
//! - [`TextCodec`]: the field-level JSON text protocol
//! - [`Decode`] / [`Encode`]: standard coercions for primitives
//!
//! ## Examples
//!
//! ```
//! use sqltypes_core::{DriverValue, Scanner, Valuer};
//!
//! let mut id: Option<i64> = None;
//! id.scan(&DriverValue::Text("42".into())).unwrap();
//! assert_eq!(id, Some(42));
//! assert_eq!(id.value().unwrap(), DriverValue::Int(42));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod protocol;
pub mod text;
pub mod value;

// Re-export commonly used types
pub use convert::{Decode, Encode, DATE_FORMAT, TIMESTAMP_FORMAT};
pub use error::{Error, Result};
pub use protocol::{Scanner, Valuer};
pub use text::{read_literal, JsonLiteral, TextCodec};
pub use value::DriverValue;
