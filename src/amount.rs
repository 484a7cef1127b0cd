//! Exact decimal parsing and display rounding for statement amounts.
//!
//! Everything here stays in `BigDecimal`. Amounts only become `f64` at the
//! point where the report writer hands them to the spreadsheet library.

use bigdecimal::{BigDecimal, One, ParseBigDecimalError, RoundingMode, Zero};
use std::str::FromStr;

/// Parse a statement amount cell.
///
/// Thousands separators are stripped first. An empty cell means zero; the
/// debit/credit columns are simply blank on the opposite side of each entry.
/// Malformed non-empty text is an error, which the row scan treats as a
/// soft failure for that row only.
pub fn parse_amount(raw: &str) -> Result<BigDecimal, ParseBigDecimalError> {
    let cleaned = raw.replace(',', "");
    if cleaned.is_empty() {
        return Ok(BigDecimal::zero());
    }
    BigDecimal::from_str(&cleaned)
}

/// Round to two fractional digits, always carrying any remainder upward
/// (toward positive infinity): scale by 100, floor, add 1 unless the scaled
/// value was already an integer, scale back.
///
/// This is a ceiling on the scaled value, not round-half-up, and it matches
/// how the bank's own totals behave. Exact two-digit values pass through
/// unchanged.
pub fn round_up_cents(value: &BigDecimal) -> BigDecimal {
    let hundred = BigDecimal::from(100);
    let scaled = value * &hundred;
    let floored = scaled.with_scale_round(0, RoundingMode::Floor);
    let cents = if scaled == floored {
        floored
    } else {
        floored + BigDecimal::one()
    };
    (cents / hundred).with_scale(2)
}
