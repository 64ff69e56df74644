// ============================================================================
// Minor-Unit Scaling
// Conversions between floating/decimal amounts and integer minor units
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest integer `n` such that `n` and `n + 1` are both exactly
/// representable as `f64` (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Smallest safe integer, `-(2^53 - 1)`.
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Highest supported precision. 10^(precision + 1) must stay exact in `f64`.
pub const MAX_PRECISION: u8 = 15;

/// Compute 10^n at compile time, saturating at `i64::MAX`
pub const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result = result.saturating_mul(10);
        i += 1;
    }
    result
}

/// Check that `units` lies within the safe integer range.
#[inline]
pub const fn is_safe_integer(units: i64) -> bool {
    units >= MIN_SAFE_INTEGER && units <= MAX_SAFE_INTEGER
}

/// Validate an integer unit count.
///
/// # Errors
/// Returns `InvalidConstruction` outside the safe integer range.
#[inline]
pub fn checked_units(units: i64) -> MoneyResult<i64> {
    if is_safe_integer(units) {
        Ok(units)
    } else {
        Err(MoneyError::InvalidConstruction)
    }
}

/// Convert an `f64` that must already hold an integral value.
///
/// # Errors
/// Returns `InvalidConstruction` for NaN, infinities, fractional values and
/// anything outside the safe integer range.
pub fn units_from_f64(value: f64) -> MoneyResult<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(MoneyError::InvalidConstruction);
    }
    Ok(value as i64)
}

/// Round half away from zero and convert to units.
///
/// # Errors
/// Returns `InvalidConstruction` if the rounded value is not a safe integer.
#[inline]
pub fn round_to_units(value: f64) -> MoneyResult<i64> {
    units_from_f64(value.round())
}

/// Scale a float amount to minor units.
///
/// Rounds on the first discarded digit only: the value is multiplied by
/// 10^(precision + 1), truncated toward zero, then divided by ten and rounded.
/// At precision 2, `12.315` becomes `1232`.
///
/// # Errors
/// Returns `InvalidConstruction` if the result is not a safe integer.
pub fn scale_f64(value: f64, precision: u8) -> MoneyResult<i64> {
    let sub_precision = pow10(precision.saturating_add(1)) as f64;
    let truncated = (value * sub_precision).trunc();
    round_to_units(truncated / 10.0)
}

/// Scale a decimal amount to minor units with the same first-discarded-digit
/// rounding as [`scale_f64`], computed exactly.
///
/// # Errors
/// Returns `InvalidConstruction` on overflow or outside the safe range.
pub fn scale_decimal(value: Decimal, precision: u8) -> MoneyResult<i64> {
    let sub_precision = Decimal::from(pow10(precision.saturating_add(1)));
    let truncated = value
        .checked_mul(sub_precision)
        .ok_or(MoneyError::InvalidConstruction)?
        .trunc();

    let rounded = (truncated / Decimal::TEN)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let units = rounded.to_i64().ok_or(MoneyError::InvalidConstruction)?;
    checked_units(units)
}

/// Parse the longest leading float numeral of `text`.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction, and an optional exponent. Trailing characters are ignored.
/// Returns `None` when no digit is found.
///
/// # Examples
/// - "12.5abc" -> 12.5
/// - "1-2" -> 1.0
/// - "--1" -> None
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }

    let int_digits = count_digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-') | Some(b'+')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}
