//! Decimal literals with locale-dependent separators.

use crate::nullable::NullDecimal;
use sqltypes_decimal::CompactDecimal;
use tracing::debug;

/// Parse a decimal whose thousands and decimal separators may be either
/// `.` or `,`.
///
/// When both characters occur, the one that appears last is the decimal
/// separator. When only one occurs, it is the decimal separator if it
/// appears once and a thousands separator otherwise. Input that still does
/// not parse yields zero.
///
/// # Examples
///
/// ```
/// use sqltypes::parse_locale_decimal;
///
/// assert_eq!(parse_locale_decimal("10.01"), parse_locale_decimal("10,01"));
/// assert_eq!(
///     parse_locale_decimal("123,010.01"),
///     parse_locale_decimal("123.010,01")
/// );
/// ```
pub fn parse_locale_decimal(s: &str) -> NullDecimal {
    let normalized = normalize_separators(s.trim());
    match CompactDecimal::parse(&normalized) {
        Ok(d) => NullDecimal(d),
        Err(e) => {
            debug!(input = s, error = %e, "discarding decimal parse error");
            NullDecimal::default()
        }
    }
}

fn normalize_separators(s: &str) -> String {
    let decimal_sep = match (s.rfind('.'), s.rfind(',')) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) => sole_occurrence(s, '.'),
        (None, Some(_)) => sole_occurrence(s, ','),
        (None, None) => None,
    };

    s.chars()
        .filter_map(|c| match c {
            '.' | ',' if Some(c) == decimal_sep => Some('.'),
            '.' | ',' => None,
            c => Some(c),
        })
        .collect()
}

fn sole_occurrence(s: &str, sep: char) -> Option<char> {
    (s.matches(sep).count() == 1).then_some(sep)
}
