//! The compact decimal value and its arithmetic.
//!
//! ## Layout
//!
//! | Bytes | Content |
//! |-------|---------|
//! | `[0, 10)` | varint of the integer part (`i64`) |
//! | `[10, 15)` | varint of the exponent (`i32`) |
//!
//! The represented number is `int_part × 10^exponent`. Converting from a
//! full-precision [`Decimal`] keeps the *truncated* integer part and the
//! decimal's exponent, so any fractional digits are lost: 5.45 (545e-2)
//! becomes `(5, -2)`, which reads back as 0.05. Integer parts outside the
//! `i64` range wrap silently. Both behaviors are part of the stored format
//! and must not change.

use crate::format::format_fixed;
use crate::varint::{put_varint, read_varint, MAX_VARINT_LEN32, MAX_VARINT_LEN64};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use sqltypes_core::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Width of the integer-part slot.
pub const INT_PART_LEN: usize = MAX_VARINT_LEN64;

/// Width of the exponent slot.
pub const EXPONENT_LEN: usize = MAX_VARINT_LEN32;

/// Total encoded width.
pub const ENCODED_LEN: usize = INT_PART_LEN + EXPONENT_LEN;

/// Fractional digits kept by [`CompactDecimal::div`].
pub const DIVISION_PRECISION: u32 = 16;

/// Largest scale the arithmetic library represents.
pub(crate) const MAX_SCALE: u32 = 28;

/// A decimal stored as two fixed-width varints.
///
/// Equality and hashing are byte-wise: `new(10, 0)` and `new(1, 1)` denote
/// the same number but are different values. Use [`CompactDecimal::cmp_value`]
/// to compare numerically.
///
/// The default value is fifteen zero bytes, i.e. `new(0, 0)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompactDecimal([u8; ENCODED_LEN]);

impl CompactDecimal {
    /// Zero, `new(0, 0)`.
    pub const ZERO: CompactDecimal = CompactDecimal([0u8; ENCODED_LEN]);

    /// Store `int_part` and `exponent` verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqltypes_decimal::CompactDecimal;
    ///
    /// let d = CompactDecimal::new(-12345, -3);
    /// assert_eq!(d.to_string(), "-12.345");
    /// assert_eq!(d.parts(), (-12345, -3));
    /// ```
    pub fn new(int_part: i64, exponent: i32) -> Self {
        let mut buf = [0u8; ENCODED_LEN];
        put_varint(&mut buf[..INT_PART_LEN], int_part);
        put_varint(&mut buf[INT_PART_LEN..], i64::from(exponent));
        CompactDecimal(buf)
    }

    /// Encode a full-precision decimal: truncated integer part plus its
    /// exponent.
    pub fn from_decimal(value: &Decimal) -> Self {
        Self::new(truncated_int_part(value), -(value.scale() as i32))
    }

    /// Parse a decimal literal (`"-12.345"`, `"1.5e3"`).
    pub fn parse(s: &str) -> Result<Self> {
        parse_decimal(s).map(|d| Self::from_decimal(&d))
    }

    /// Encode a float through its shortest round-trip decimal rendering.
    pub fn from_f64(value: f64) -> Result<Self> {
        decimal_from_f64(value).map(|d| Self::from_decimal(&d))
    }

    /// Round `value` half away from zero to `exponent`, then encode the
    /// truncated integer part with exactly that exponent.
    pub fn from_f64_with_exponent(value: f64, exponent: i32) -> Result<Self> {
        let d = decimal_from_f64(value)?;
        let rounded = if exponent <= 0 {
            d.round_dp_with_strategy(exponent.unsigned_abs(), RoundingStrategy::MidpointAwayFromZero)
        } else {
            round_to_power_of_ten(&d, exponent.unsigned_abs()).unwrap_or(d)
        };
        Ok(Self::new(truncated_int_part(&rounded), exponent))
    }

    /// Rebuild from the 15-byte layout.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let buf: [u8; ENCODED_LEN] = bytes
            .try_into()
            .map_err(|_| Error::conversion("Bytes", "CompactDecimal"))?;
        if read_varint(&buf[..INT_PART_LEN]).is_none() || read_varint(&buf[INT_PART_LEN..]).is_none()
        {
            return Err(Error::Parse("malformed compact decimal".to_string()));
        }
        Ok(CompactDecimal(buf))
    }

    /// The raw 15-byte layout.
    pub fn as_bytes(&self) -> &[u8; ENCODED_LEN] {
        &self.0
    }

    /// Copy of the raw 15-byte layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// The stored `(int_part, exponent)` pair, exactly as encoded.
    pub fn parts(&self) -> (i64, i32) {
        (self.int_part(), self.exponent())
    }

    /// The stored integer part.
    pub fn int_part(&self) -> i64 {
        read_varint(&self.0[..INT_PART_LEN]).map_or(0, |(v, _)| v)
    }

    /// The stored exponent.
    pub fn exponent(&self) -> i32 {
        read_varint(&self.0[INT_PART_LEN..]).map_or(0, |(v, _)| v as i32)
    }

    /// Decode to a full-precision decimal, `int_part × 10^exponent`.
    ///
    /// Values beyond the arithmetic library's range saturate; exponents
    /// below its smallest scale drop the extra low-order digits.
    pub fn to_decimal(&self) -> Decimal {
        let (int_part, exponent) = self.parts();
        if exponent >= 0 {
            let scaled = pow10(exponent.unsigned_abs())
                .and_then(|p| Decimal::from(int_part).checked_mul(p));
            return match scaled {
                Some(d) => d,
                None if int_part == 0 => Decimal::ZERO,
                None => {
                    warn!(int_part, exponent, "compact decimal exceeds decimal range, saturating");
                    if int_part < 0 {
                        Decimal::MIN
                    } else {
                        Decimal::MAX
                    }
                }
            };
        }

        let scale = exponent.unsigned_abs();
        if scale <= MAX_SCALE {
            return Decimal::from_i128_with_scale(i128::from(int_part), scale);
        }
        // i64 has at most 19 digits, so anything past that is zero
        let excess = scale - MAX_SCALE;
        if excess > 19 {
            return Decimal::ZERO;
        }
        Decimal::from_i128_with_scale(i128::from(int_part) / 10i128.pow(excess), MAX_SCALE)
    }

    /// Convert to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        self.to_decimal().to_f64().unwrap_or(0.0)
    }

    /// Whether the value is numerically zero.
    pub fn is_zero(&self) -> bool {
        self.int_part() == 0
    }

    /// -1, 0 or 1 by the sign of the value.
    pub fn sign(&self) -> i32 {
        self.int_part().signum() as i32
    }

    /// Compare numerically.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.to_decimal().cmp(&other.to_decimal())
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Self::from_decimal(&self.to_decimal().abs())
    }

    /// Negation.
    pub fn neg(self) -> Self {
        Self::from_decimal(&-self.to_decimal())
    }

    /// `self + other`, saturating at the library range.
    pub fn add(self, other: Self) -> Self {
        Self::from_decimal(&self.to_decimal().saturating_add(other.to_decimal()))
    }

    /// `self - other`, saturating at the library range.
    pub fn sub(self, other: Self) -> Self {
        Self::from_decimal(&self.to_decimal().saturating_sub(other.to_decimal()))
    }

    /// `self * other`, saturating at the library range.
    pub fn mul(self, other: Self) -> Self {
        Self::from_decimal(&self.to_decimal().saturating_mul(other.to_decimal()))
    }

    /// `self / other`.
    ///
    /// The quotient is rounded half away from zero to
    /// [`DIVISION_PRECISION`] digits and stored with exponent
    /// `-DIVISION_PRECISION`, then truncated like every other result.
    pub fn div(self, other: Self) -> Result<Self> {
        let divisor = other.to_decimal();
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let dividend = self.to_decimal();
        let quotient = dividend.checked_div(divisor).unwrap_or_else(|| {
            warn!(%dividend, %divisor, "decimal quotient out of range, saturating");
            if dividend.is_sign_negative() != divisor.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        });
        let rounded =
            quotient.round_dp_with_strategy(DIVISION_PRECISION, RoundingStrategy::MidpointAwayFromZero);
        Ok(Self::new(
            truncated_int_part(&rounded),
            -(DIVISION_PRECISION as i32),
        ))
    }

    /// Render rounded half away from zero to `places` fractional digits.
    ///
    /// A negative `places` rounds left of the decimal point.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqltypes_decimal::CompactDecimal;
    ///
    /// assert_eq!(CompactDecimal::new(0, 0).to_fixed_string(2), "0.00");
    /// assert_eq!(CompactDecimal::new(545, -2).to_fixed_string(1), "5.5");
    /// assert_eq!(CompactDecimal::new(545, 0).to_fixed_string(-1), "550");
    /// ```
    pub fn to_fixed_string(&self, places: i32) -> String {
        format_fixed(&self.to_decimal(), places)
    }
}

/// Integer part truncated toward zero, wrapped into an `i64`.
fn truncated_int_part(value: &Decimal) -> i64 {
    let t = value.trunc();
    (t.mantissa() / 10i128.pow(t.scale())) as i64
}

/// `10^n` if representable.
pub(crate) fn pow10(n: u32) -> Option<Decimal> {
    if n > MAX_SCALE {
        return None;
    }
    Some(Decimal::from_i128_with_scale(10i128.pow(n), 0))
}

/// Round to the nearest multiple of `10^n`, ties away from zero.
pub(crate) fn round_to_power_of_ten(value: &Decimal, n: u32) -> Option<Decimal> {
    let factor = pow10(n)?;
    value
        .checked_div(factor)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(factor)
}

pub(crate) fn parse_decimal(s: &str) -> Result<Decimal> {
    let s = s.trim();
    let parsed = if s.contains(['e', 'E']) {
        Decimal::from_scientific(s)
    } else {
        Decimal::from_str(s)
    };
    parsed.map_err(|e| Error::Parse(format!("can't convert {:?} to decimal: {}", s, e)))
}

fn decimal_from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::Parse(format!("can't convert {} to decimal", value)));
    }
    // Display gives the shortest text that round-trips
    parse_decimal(&value.to_string())
        .or_else(|_| Decimal::from_f64(value).ok_or_else(|| {
            Error::Parse(format!("can't convert {} to decimal", value))
        }))
}

impl FromStr for CompactDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<i64> for CompactDecimal {
    fn from(v: i64) -> Self {
        Self::new(v, 0)
    }
}

impl From<&Decimal> for CompactDecimal {
    fn from(v: &Decimal) -> Self {
        Self::from_decimal(v)
    }
}

impl From<Decimal> for CompactDecimal {
    fn from(v: Decimal) -> Self {
        Self::from_decimal(&v)
    }
}

impl From<CompactDecimal> for Decimal {
    fn from(v: CompactDecimal) -> Self {
        v.to_decimal()
    }
}

impl fmt::Display for CompactDecimal {
    /// Decoded value with trailing fractional zeros trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = self.to_decimal().normalize();
        if d.is_zero() {
            d.set_sign_positive(true);
        }
        write!(f, "{}", d)
    }
}

impl fmt::Debug for CompactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, exponent) = self.parts();
        f.debug_struct("CompactDecimal")
            .field("int_part", &int_part)
            .field("exponent", &exponent)
            .finish()
    }
}

impl std::ops::Add for CompactDecimal {
    type Output = CompactDecimal;

    fn add(self, rhs: Self) -> Self {
        CompactDecimal::add(self, rhs)
    }
}

impl std::ops::Sub for CompactDecimal {
    type Output = CompactDecimal;

    fn sub(self, rhs: Self) -> Self {
        CompactDecimal::sub(self, rhs)
    }
}

impl std::ops::Mul for CompactDecimal {
    type Output = CompactDecimal;

    fn mul(self, rhs: Self) -> Self {
        CompactDecimal::mul(self, rhs)
    }
}

impl std::ops::Neg for CompactDecimal {
    type Output = CompactDecimal;

    fn neg(self) -> Self {
        CompactDecimal::neg(self)
    }
}
