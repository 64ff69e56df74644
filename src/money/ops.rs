// ============================================================================
// Arithmetic and Comparison
// Binary operators over independently normalized operands
// ============================================================================

use super::normalize::to_units;
use super::{Amount, Money};
use crate::config::MoneySettings;
use crate::numeric::{parse_float_prefix, round_to_units, MoneyError, MoneyResult};
use rust_decimal::prelude::ToPrimitive;
use std::cmp::Ordering;

// ============================================================================
// Money [+/-] Money
// ============================================================================

/// Sum of two amounts, exact in minor units.
///
/// # Errors
/// Propagates normalization errors; `InvalidConstruction` if the sum leaves
/// the safe range.
pub fn add<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    rhs: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<Money> {
    Money::cents(to_units(lhs, settings)? + to_units(rhs, settings)?)
}

/// Difference of two amounts, exact in minor units.
pub fn subtract<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    rhs: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<Money> {
    Money::cents(to_units(lhs, settings)? - to_units(rhs, settings)?)
}

// ============================================================================
// Money [*//] Number
// ============================================================================

/// `lhs` scaled by a plain factor, rounded half away from zero.
///
/// # Errors
/// `InvalidConstruction` if the factor is not a number or the product is not
/// a safe integer.
pub fn multiply<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    factor: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<Money> {
    let units = to_units(lhs, settings)?;
    let factor = to_factor(&factor.into(), settings);
    Money::cents(round_to_units(units as f64 * factor)?)
}

/// `lhs` divided by a plain divisor, rounded half away from zero.
///
/// # Errors
/// `DivisionByZero` for a zero divisor, otherwise as [`multiply`].
pub fn divide<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    divisor: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<Money> {
    let units = to_units(lhs, settings)?;
    let divisor = to_factor(&divisor.into(), settings);
    if divisor == 0.0 {
        return Err(MoneyError::DivisionByZero);
    }
    Money::cents(round_to_units(units as f64 / divisor)?)
}

/// `percent` percent of `lhs`, rounded half away from zero.
pub fn percent<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    percent: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<Money> {
    let units = to_units(lhs, settings)?;
    let percent = to_factor(&percent.into(), settings);
    Money::cents(round_to_units(units as f64 * (percent / 100.0))?)
}

/// Negated amount.
pub fn negate<'a>(value: impl Into<Amount<'a>>, settings: &MoneySettings) -> MoneyResult<Money> {
    Money::cents(-to_units(value, settings)?)
}

/// Read an amount as a plain float factor, not scaled to minor units.
///
/// Text uses its leading numeral and `Money` its value in whole units.
/// Anything without a numeric reading becomes NaN, which later fails
/// construction.
pub fn to_factor(amount: &Amount<'_>, settings: &MoneySettings) -> f64 {
    match amount {
        Amount::Number(value) => *value,
        Amount::Decimal(value) => value.to_f64().unwrap_or(f64::NAN),
        Amount::Text(text) => parse_float_prefix(text).unwrap_or(f64::NAN),
        Amount::Money(money) => money.units() as f64 / settings.scale() as f64,
        Amount::Unsupported => f64::NAN,
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Order two amounts by their normalized units.
pub fn compare<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    rhs: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<Ordering> {
    Ok(to_units(lhs, settings)?.cmp(&to_units(rhs, settings)?))
}

pub fn equal<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    rhs: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<bool> {
    compare(lhs, rhs, settings).map(Ordering::is_eq)
}

pub fn less_than<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    rhs: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<bool> {
    compare(lhs, rhs, settings).map(Ordering::is_lt)
}

pub fn less_than_or_equal<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    rhs: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<bool> {
    compare(lhs, rhs, settings).map(Ordering::is_le)
}

pub fn greater_than<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    rhs: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<bool> {
    compare(lhs, rhs, settings).map(Ordering::is_gt)
}

pub fn greater_than_or_equal<'a, 'b>(
    lhs: impl Into<Amount<'a>>,
    rhs: impl Into<Amount<'b>>,
    settings: &MoneySettings,
) -> MoneyResult<bool> {
    compare(lhs, rhs, settings).map(Ordering::is_ge)
}
