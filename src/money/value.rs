// ============================================================================
// Money
// Integer minor-unit value type with normalizing constructors
// ============================================================================

use super::format::{format_units, format_units_grouped};
use super::normalize::to_units;
use super::{ops, Amount};
use crate::config::{self, MoneySettings, SettingsOverrides};
use crate::numeric::{checked_units, is_safe_integer, units_from_f64, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monetary value stored as a signed count of minor units.
///
/// `units` is the amount scaled by 10^precision (cents at the default
/// precision of 2) and always lies within `±(2^53 - 1)`.
///
/// Methods without a `_with` suffix read the global settings once per call.
/// The `_with` variants and the functions in [`ops`] take settings
/// explicitly.
///
/// # Example
/// ```ignore
/// use fixed_money::Money;
///
/// let price = Money::from_amount("19.99")?;     // 1999 units
/// let total = price.multiply(3)?;               // 59.97
/// let taxed = total.add(total.percent(8)?)?;    // 64.77
/// assert_eq!(taxed.to_string(), "64.77");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "i64"))]
#[repr(transparent)]
pub struct Money {
    units: i64,
}

impl Money {
    /// Zero value
    pub const ZERO: Self = Self { units: 0 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw count of minor units.
    ///
    /// # Errors
    /// Returns `InvalidConstruction` outside the safe integer range.
    #[inline]
    pub fn cents(units: i64) -> MoneyResult<Self> {
        checked_units(units).map(|units| Self { units })
    }

    /// Create from minor units held in a float.
    ///
    /// # Errors
    /// Returns `InvalidConstruction` for non-integer or non-finite values.
    pub fn from_units_f64(units: f64) -> MoneyResult<Self> {
        units_from_f64(units).map(|units| Self { units })
    }

    /// Create from any amount, normalized under the global settings.
    ///
    /// # Errors
    /// `InvalidInput` for unsupported input in strict mode,
    /// `InvalidConstruction` if the amount leaves the safe range.
    pub fn from_amount<'a>(amount: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        Self::from_amount_with(amount, &config::current())
    }

    /// Create from any amount, normalized under `settings`.
    pub fn from_amount_with<'a>(
        amount: impl Into<Amount<'a>>,
        settings: &MoneySettings,
    ) -> MoneyResult<Self> {
        Self::cents(to_units(amount, settings)?)
    }

    // ========================================================================
    // Accessors and Mutation
    // ========================================================================

    /// Minor units
    #[inline]
    pub const fn units(&self) -> i64 {
        self.units
    }

    /// Alias for [`Money::units`]
    #[inline]
    pub const fn value(&self) -> i64 {
        self.units()
    }

    /// Replace the stored units.
    ///
    /// This is the only mutating operation; arithmetic always returns new
    /// values.
    pub fn set_units(&mut self, units: i64) -> MoneyResult<()> {
        self.units = checked_units(units)?;
        Ok(())
    }

    /// Replace the stored units with a normalized amount.
    pub fn set<'a>(&mut self, amount: impl Into<Amount<'a>>) -> MoneyResult<()> {
        self.set_with(amount, &config::current())
    }

    pub fn set_with<'a>(
        &mut self,
        amount: impl Into<Amount<'a>>,
        settings: &MoneySettings,
    ) -> MoneyResult<()> {
        self.set_units(to_units(amount, settings)?)
    }

    /// Check that the stored units are a safe integer.
    ///
    /// Construction already guarantees this; the check is kept for callers
    /// that want an explicit assertion.
    pub fn assert_finite(&self) -> MoneyResult<&Self> {
        if is_safe_integer(self.units) {
            Ok(self)
        } else {
            Err(MoneyError::NonFinite)
        }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.units == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.units < 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.units > 0
    }

    /// Negated value. Cannot fail since the safe range is symmetric.
    #[inline]
    pub const fn negated(&self) -> Self {
        Self { units: -self.units }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    #[allow(clippy::should_implement_trait)]
    pub fn add<'a>(&self, rhs: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        ops::add(self, rhs, &config::current())
    }

    /// Alias for [`Money::add`]
    pub fn plus<'a>(&self, rhs: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        self.add(rhs)
    }

    pub fn subtract<'a>(&self, rhs: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        ops::subtract(self, rhs, &config::current())
    }

    /// Alias for [`Money::subtract`]
    pub fn minus<'a>(&self, rhs: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        self.subtract(rhs)
    }

    /// Multiply by a plain factor (`2`, `"1.5"`), rounding to the nearest unit.
    pub fn multiply<'a>(&self, factor: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        ops::multiply(self, factor, &config::current())
    }

    /// Alias for [`Money::multiply`]
    pub fn times<'a>(&self, factor: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        self.multiply(factor)
    }

    /// Divide by a plain divisor, rounding to the nearest unit.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero divisor.
    pub fn divide<'a>(&self, divisor: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        ops::divide(self, divisor, &config::current())
    }

    /// Alias for [`Money::divide`]
    pub fn divided_by<'a>(&self, divisor: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        self.divide(divisor)
    }

    /// `percent` percent of this value (`percent(15)` is 15%).
    pub fn percent<'a>(&self, percent: impl Into<Amount<'a>>) -> MoneyResult<Self> {
        ops::percent(self, percent, &config::current())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare against any amount normalized under the global settings.
    ///
    /// Unlike `==`, which compares units directly, this parses `rhs` first.
    pub fn equals<'a>(&self, rhs: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        ops::equal(self, rhs, &config::current())
    }

    pub fn less_than<'a>(&self, rhs: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        ops::less_than(self, rhs, &config::current())
    }

    pub fn less_than_or_equal_to<'a>(&self, rhs: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        ops::less_than_or_equal(self, rhs, &config::current())
    }

    pub fn greater_than<'a>(&self, rhs: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        ops::greater_than(self, rhs, &config::current())
    }

    pub fn greater_than_or_equal_to<'a>(&self, rhs: impl Into<Amount<'a>>) -> MoneyResult<bool> {
        ops::greater_than_or_equal(self, rhs, &config::current())
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Format under `settings` with exactly `precision` fractional digits.
    pub fn format_with(&self, settings: &MoneySettings) -> String {
        format_units(self.units, settings)
    }

    /// Alias for `to_string`; always uses the configured precision.
    pub fn to_fixed(&self) -> String {
        self.to_string()
    }

    /// Format with the integer digits grouped by the configured separator.
    pub fn to_grouped_string(&self) -> String {
        format_units_grouped(self.units, &config::current())
    }

    /// Value in whole units as a decimal with scale = precision.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        self.to_decimal_with(&config::current())
    }

    /// # Errors
    /// `InvalidSettings` if the precision exceeds the decimal scale limit.
    pub fn to_decimal_with(&self, settings: &MoneySettings) -> MoneyResult<Decimal> {
        let mut decimal = Decimal::from(self.units);
        decimal
            .set_scale(settings.precision as u32)
            .map_err(|_| MoneyError::InvalidSettings("precision exceeds decimal scale"))?;
        Ok(decimal)
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Snapshot of the global settings
    pub fn settings() -> MoneySettings {
        config::current()
    }

    /// Replace the global settings with the defaults merged with `overrides`.
    pub fn set_settings(overrides: SettingsOverrides) -> MoneyResult<MoneySettings> {
        config::replace(overrides)
    }

    /// Restore the default global settings.
    pub fn reset_settings() {
        config::reset()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl TryFrom<i64> for Money {
    type Error = MoneyError;

    fn try_from(units: i64) -> Result<Self, Self::Error> {
        Self::cents(units)
    }
}

impl TryFrom<f64> for Money {
    type Error = MoneyError;

    /// Minor units held in a float; see [`Money::from_units_f64`].
    fn try_from(units: f64) -> Result<Self, Self::Error> {
        Self::from_units_f64(units)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.units
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    /// Parse a textual amount under the global settings.
    ///
    /// Unparseable text yields zero, as with [`Money::from_amount`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_amount(s)
    }
}

impl fmt::Display for Money {
    /// Formats under the global settings in effect right now, so the same
    /// value prints differently after a precision change.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with(&config::current()))
    }
}

// ============================================================================
// Tests
// ============================================================================
