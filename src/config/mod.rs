// ============================================================================
// Configuration Module
// Money settings and the process-wide default instance
// ============================================================================

mod settings;
mod store;

pub use settings::{MoneySettings, SettingsOverrides};
pub use store::{current, install, replace, reset};
