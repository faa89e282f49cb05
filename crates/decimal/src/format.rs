//! Fixed-point rendering of full-precision decimals.

use crate::codec::{pow10, round_to_power_of_ten, MAX_SCALE};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

/// Render `value` rounded half away from zero to exactly `places`
/// fractional digits.
///
/// A negative `places` rounds to the nearest multiple of `10^-places` and
/// renders an integer. When that multiple lies outside the library range,
/// the result saturates to the largest multiple toward zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sqltypes_decimal::format_fixed;
///
/// let v = Decimal::new(545, 2);
/// assert_eq!(format_fixed(&v, 0), "5");
/// assert_eq!(format_fixed(&v, 1), "5.5");
/// assert_eq!(format_fixed(&v, 3), "5.450");
/// assert_eq!(format_fixed(&Decimal::new(545, 0), -1), "550");
/// ```
pub fn format_fixed(value: &Decimal, places: i32) -> String {
    if places < 0 {
        return format_rounded_integer(value, places.unsigned_abs());
    }

    let places = places.unsigned_abs();
    let mut rounded =
        value.round_dp_with_strategy(places.min(MAX_SCALE), RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    let mut text = rounded.to_string();
    pad_fraction(&mut text, places as usize);
    text
}

fn format_rounded_integer(value: &Decimal, n: u32) -> String {
    let mut rounded = match round_to_power_of_ten(value, n) {
        Some(d) => d,
        // beyond the library range every representable value rounds to zero
        None if n > MAX_SCALE => Decimal::ZERO,
        None => {
            warn!(%value, places = -(n as i64), "rounded value exceeds decimal range, saturating");
            truncate_to_power_of_ten(value, n)
        }
    };
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.trunc().to_string()
}

/// Largest multiple of `10^n` not further from zero than `value`.
fn truncate_to_power_of_ten(value: &Decimal, n: u32) -> Decimal {
    pow10(n)
        .and_then(|factor| value.checked_div(factor)?.trunc().checked_mul(factor))
        .unwrap_or(Decimal::ZERO)
}

fn pad_fraction(text: &mut String, places: usize) {
    if places == 0 {
        return;
    }
    let have = match text.find('.') {
        Some(dot) => text.len() - dot - 1,
        None => {
            text.push('.');
            0
        }
    };
    text.extend(std::iter::repeat('0').take(places.saturating_sub(have)));
}
