// ============================================================================
// Fixed Money Library
// Monetary values as integer minor units with configurable precision
// ============================================================================

//! # Fixed Money
//!
//! Currency amounts stored as a signed integer count of minor units
//! ("cents"), so that sums and comparisons never suffer binary floating-point
//! rounding.
//!
//! ## Features
//!
//! - **Tolerant parsing** of numbers, decimals and text such as `"$1,299.99"`
//!   or accounting negatives `"(4.50)"`
//! - **Predictable rounding**: amounts round on the first discarded digit
//! - **Exact integer arithmetic** once an amount is normalized
//! - **Configurable precision and decimal marker**, passed explicitly or taken
//!   from a process-wide default
//!
//! ## Example
//!
//! ```rust
//! use fixed_money::prelude::*;
//!
//! let price = Money::from_amount("19.99").unwrap();
//! assert_eq!(price.units(), 1999);
//!
//! let total = price.multiply(3).unwrap().add("(0.97)").unwrap();
//! assert_eq!(total.to_string(), "59.00");
//!
//! // Explicit settings bypass the global store entirely
//! let settings = MoneySettings::default().with_precision(3);
//! let fine = Money::from_amount_with(1.2345, &settings).unwrap();
//! assert_eq!(fine.format_with(&settings), "1.235");
//! ```

pub mod config;
pub mod money;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{MoneySettings, SettingsOverrides};
    pub use crate::money::{ops, Amount, Money};
    pub use crate::numeric::{MoneyError, MoneyResult};
}
