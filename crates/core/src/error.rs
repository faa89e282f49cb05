//! Error type shared by every sqltypes crate.

use thiserror::Error;

/// All sqltypes errors.
///
/// Errors are always reported to the immediate caller; nothing in this
/// workspace retries or aborts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed literal (decimal, date, integer, float or boolean)
    #[error("parse error: {0}")]
    Parse(String),

    /// Driver value of an incompatible kind or out of range for the target
    #[error("cannot convert {from} to {to}")]
    Conversion {
        /// Kind of the source value
        from: &'static str,
        /// Target type
        to: &'static str,
    },

    /// Decimal division by a zero-valued operand
    #[error("decimal division by zero")]
    DivisionByZero,

    /// Malformed JSON text
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for sqltypes operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a conversion error from a source kind name to a target name.
    pub fn conversion(from: &'static str, to: &'static str) -> Self {
        Error::Conversion { from, to }
    }

    /// Check if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if this is a conversion error.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion { .. })
    }

    /// Check if this is a division by zero.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Error::DivisionByZero)
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
