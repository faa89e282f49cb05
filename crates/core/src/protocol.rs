//! Database boundary protocols
//!
//! A driver reads a column into a [`DriverValue`] and hands it to
//! [`Scanner::scan`]; on the way back it asks [`Valuer::value`] for the
//! representation to bind.
//!
//! `Option<T>` implements both for every primitive with [`Decode`] /
//! [`Encode`], mapping `None` to NULL. This is the two-state form; the
//! sentinel wrappers in the `sqltypes` crate keep the in-band encoding for
//! data that already relies on it.

use crate::convert::{Decode, Encode};
use crate::error::Result;
use crate::value::DriverValue;

/// Fills `self` from a driver value.
pub trait Scanner {
    /// Replace the receiver's contents with `value`.
    ///
    /// What NULL means is up to the implementation.
    fn scan(&mut self, value: &DriverValue) -> Result<()>;
}

/// Produces the driver value to bind for `self`.
pub trait Valuer {
    /// Encode the receiver for the driver.
    fn value(&self) -> Result<DriverValue>;
}

impl<T: Decode> Scanner for Option<T> {
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        *self = if value.is_null() {
            None
        } else {
            Some(T::decode(value)?)
        };
        Ok(())
    }
}

impl<T: Encode> Valuer for Option<T> {
    fn value(&self) -> Result<DriverValue> {
        match self {
            Some(v) => v.encode(),
            None => Ok(DriverValue::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_distinguishes_zero_from_null() {
        let mut v: Option<i64> = Some(5);
        v.scan(&DriverValue::Int(0)).unwrap();
        assert_eq!(v, Some(0));
        assert_eq!(v.value().unwrap(), DriverValue::Int(0));

        v.scan(&DriverValue::Null).unwrap();
        assert_eq!(v, None);
        assert_eq!(v.value().unwrap(), DriverValue::Null);
    }

    #[test]
    fn test_option_scan_error_leaves_value() {
        let mut v: Option<i64> = Some(5);
        assert!(v.scan(&DriverValue::from("x")).is_err());
        assert_eq!(v, Some(5));
    }

    #[test]
    fn test_option_string_empty_is_not_null() {
        let mut v: Option<String> = None;
        v.scan(&DriverValue::from("")).unwrap();
        assert_eq!(v.as_deref(), Some(""));
        assert_eq!(v.value().unwrap(), DriverValue::from(""));
    }
}
