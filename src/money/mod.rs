// ============================================================================
// Money Module
// Value type, normalization, arithmetic and formatting
// ============================================================================
//
// Data flow: Amount -> normalize::to_units -> i64 minor units -> ops -> Money
// -> format. Everything after normalization is integer arithmetic, except the
// plain factor taken by multiply/divide/percent.

mod amount;
pub mod format;
pub mod normalize;
pub mod ops;
mod value;

pub use amount::Amount;
pub use format::{format_units, format_units_grouped};
pub use normalize::to_units;
pub use value::Money;
