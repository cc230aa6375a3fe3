use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// Number of minor units in one major unit (cents per euro).
pub const MINOR_UNITS_PER_MAJOR: u128 = 100;

/// Parses user-entered decimal text into minor units.
///
/// Blank or unparsable text yields `0`. See [`try_parse_amount`] for the
/// accepted formats.
pub fn parse_amount(input: &str) -> i64 {
    try_parse_amount(input).unwrap_or(0)
}

/// Parses user-entered decimal text into minor units.
///
/// Surrounding whitespace is ignored and either `.` or `,` is accepted as the
/// decimal separator. Digits beyond the minor unit are truncated toward zero
/// (`"0.299"` is 29). Returns `None` for blank text, text that is not a
/// number, or values that do not fit in an `i64` of minor units.
pub fn try_parse_amount(input: &str) -> Option<i64> {
    let cleaned = input.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }

    let value = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()?;
    value
        .checked_mul(Decimal::ONE_HUNDRED)?
        .trunc()
        .to_i64()
}

/// Formats minor units as decimal text with two fractional digits.
pub fn format_amount(minor: impl Into<i128>) -> String {
    let minor = minor.into();
    let sign = if minor < 0 { "-" } else { "" };
    let magnitude = minor.unsigned_abs();
    format!(
        "{sign}{}.{:02}",
        magnitude / MINOR_UNITS_PER_MAJOR,
        magnitude % MINOR_UNITS_PER_MAJOR
    )
}

/// Like [`format_amount`], followed by the currency symbol when one is given.
pub fn display_amount(minor: impl Into<i128>, currency: Option<&str>) -> String {
    let amount = format_amount(minor);
    match currency.map(str::trim) {
        Some(symbol) if !symbol.is_empty() => format!("{amount} {symbol}"),
        _ => amount,
    }
}
