//! Nullable scalar wrappers with in-band NULL sentinels
//!
//! Each wrapper is a newtype whose NULL is a reserved value of the inner
//! type, so there is no separate flag:
//!
//! | Wrapper | Inner | NULL |
//! |---------|-------|------|
//! | [`NullBool`] | `bool` | `false` |
//! | [`NullInt0`] | `i64` | `0` |
//! | [`NullIntM1`] | `i64` | `-1` |
//! | [`NullUint`] | `u64` | `0` |
//! | [`NullFloat`] | `f64` | `0.0` |
//! | [`NullString`] | `String` | `""` |
//! | [`NullTime`] | `DateTime<Utc>` | `0001-01-01T00:00:00Z` |
//! | [`NullDate`] | `String` | any zero component |
//! | [`NullDecimal`] | `CompactDecimal` | none |
//!
//! ## NULL on the two boundaries
//!
//! - Database: scanning NULL resets the wrapper to its sentinel
//!   ([`NullDecimal`] keeps its value instead).
//! - JSON: `unmarshal_text(b"null")` leaves the wrapper unchanged, so a
//!   partial document only touches the fields it names.
//!
//! Prefer `Option<T>` for new columns; it implements the same protocols
//! without giving up a value.

mod boolean;
mod date;
mod decimal;
mod numeric;
mod string;
mod time;

pub use boolean::NullBool;
pub use date::{NullDate, ZERO_DATE};
pub use decimal::NullDecimal;
pub use numeric::{NullFloat, NullInt0, NullIntM1, NullUint};
pub use string::NullString;
pub use time::{zero_time, NullTime};
