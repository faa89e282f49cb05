//! Compact decimal encoding for sqltypes
//!
//! A [`CompactDecimal`] is a fixed 15-byte value holding two signed varints:
//! the truncated integer part (10-byte slot) and the exponent (5-byte slot).
//! Arithmetic and formatting decode to a full-precision
//! [`rust_decimal::Decimal`], compute there, and re-encode.
//!
//! The encoding is lossy on purpose and stable on disk: see [`codec`] for
//! the exact rules.
//!
//! ## Examples
//!
//! ```
//! use sqltypes_decimal::CompactDecimal;
//!
//! let a = CompactDecimal::new(1, 0);
//! let b = CompactDecimal::new(2, 0);
//! assert_eq!((a + b).to_fixed_string(1), "3.0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod format;
pub mod json;
pub mod sql;
pub mod varint;

// Re-export main types
pub use codec::{CompactDecimal, DIVISION_PRECISION, ENCODED_LEN, EXPONENT_LEN, INT_PART_LEN};
pub use format::format_fixed;
pub use rust_decimal::Decimal;
