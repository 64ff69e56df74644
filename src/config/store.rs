// ============================================================================
// Global Settings Store
// Process-wide settings used by the convenience API on `Money`
// ============================================================================

use super::settings::{MoneySettings, SettingsOverrides};
use crate::numeric::MoneyResult;
use parking_lot::RwLock;
use std::sync::LazyLock;

static GLOBAL_SETTINGS: LazyLock<RwLock<MoneySettings>> =
    LazyLock::new(|| RwLock::new(MoneySettings::default()));

/// Snapshot of the active global settings.
///
/// Callers should take one snapshot per operation so that parsing and
/// formatting never observe two different precisions.
pub fn current() -> MoneySettings {
    GLOBAL_SETTINGS.read().clone()
}

/// Replace the global settings with the defaults merged with `overrides`.
///
/// # Errors
/// Returns `InvalidSettings` and leaves the active settings untouched if the
/// merged settings do not validate.
pub fn replace(overrides: SettingsOverrides) -> MoneyResult<MoneySettings> {
    let settings = MoneySettings::merged(overrides);
    install(settings.clone())?;
    Ok(settings)
}

/// Install a complete settings value as the global settings.
pub fn install(settings: MoneySettings) -> MoneyResult<()> {
    settings.validate()?;
    tracing::debug!(
        precision = settings.precision,
        decimal = %settings.decimal,
        separator = %settings.separator,
        error_on_invalid = settings.error_on_invalid,
        "Replacing global money settings"
    );
    *GLOBAL_SETTINGS.write() = settings;
    Ok(())
}

/// Restore the default settings.
pub fn reset() {
    tracing::debug!("Resetting global money settings to defaults");
    *GLOBAL_SETTINGS.write() = MoneySettings::default();
}
