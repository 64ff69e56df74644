// ============================================================================
// Money Settings
// Separator, decimal marker, strict-parsing flag and precision
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult, MAX_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings consulted by normalization and formatting.
///
/// Settings are read when an operation runs, never stored inside a value,
/// so the same units render differently under a different precision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MoneySettings {
    /// Thousands separator, only used by grouped display formatting
    pub separator: String,

    /// Decimal marker recognized in text input and emitted when formatting
    pub decimal: char,

    /// Reject unsupported input instead of treating it as zero
    pub error_on_invalid: bool,

    /// Fractional digits per unit (2 = cents)
    pub precision: u8,
}

impl Default for MoneySettings {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            decimal: '.',
            error_on_invalid: false,
            precision: 2,
        }
    }
}

impl MoneySettings {
    /// Defaults with `overrides` applied on top.
    ///
    /// Always starts from the defaults, never from previously active settings.
    pub fn merged(overrides: SettingsOverrides) -> Self {
        let defaults = Self::default();
        Self {
            separator: overrides.separator.unwrap_or(defaults.separator),
            decimal: overrides.decimal.unwrap_or(defaults.decimal),
            error_on_invalid: overrides
                .error_on_invalid
                .unwrap_or(defaults.error_on_invalid),
            precision: overrides.precision.unwrap_or(defaults.precision),
        }
    }

    /// Builder method: Set thousands separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder method: Set decimal marker
    pub fn with_decimal(mut self, decimal: char) -> Self {
        self.decimal = decimal;
        self
    }

    /// Builder method: Enable or disable strict parsing
    pub fn with_error_on_invalid(mut self, error_on_invalid: bool) -> Self {
        self.error_on_invalid = error_on_invalid;
        self
    }

    /// Builder method: Set precision
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Scale factor 10^precision
    #[inline]
    pub fn scale(&self) -> i64 {
        crate::numeric::pow10(self.precision)
    }

    /// Validate the settings
    pub fn validate(&self) -> MoneyResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(MoneyError::InvalidSettings("precision must be at most 15"));
        }

        if self.decimal.is_ascii_digit() || self.decimal == '-' {
            return Err(MoneyError::InvalidSettings(
                "decimal marker cannot be a digit or minus sign",
            ));
        }

        if self.separator.chars().any(|c| c == self.decimal) {
            return Err(MoneyError::InvalidSettings(
                "separator cannot contain the decimal marker",
            ));
        }

        Ok(())
    }

    /// Load settings from a JSON object, missing keys taking their defaults.
    ///
    /// ```ignore
    /// let settings = MoneySettings::from_json(r#"{"decimal": ",", "separator": "."}"#)?;
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> MoneyResult<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|_| MoneyError::InvalidSettings("malformed settings json"))?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Partial settings merged over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SettingsOverrides {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub separator: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub decimal: Option<char>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub error_on_invalid: Option<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub precision: Option<u8>,
}

impl SettingsOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn decimal(mut self, decimal: char) -> Self {
        self.decimal = Some(decimal);
        self
    }

    pub fn error_on_invalid(mut self, error_on_invalid: bool) -> Self {
        self.error_on_invalid = Some(error_on_invalid);
        self
    }

    pub fn precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }
}
