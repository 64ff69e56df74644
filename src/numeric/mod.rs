// ============================================================================
// Numeric Module
// Integer minor-unit scaling and the error vocabulary shared by the crate
// ============================================================================
//
// This module provides:
// - MoneyError / MoneyResult: error types for every fallible operation
// - Scaling helpers: float/decimal amounts -> safe-range i64 minor units
// - A float-prefix parser used for textual amounts and factors
//
// Design principles:
// - Floating point is only used at the input boundary
// - All conversions return Result (no panics)
// - Units stay within the safe integer range ±(2^53 - 1)

mod errors;
mod scaling;

pub use errors::{MoneyError, MoneyResult};
pub use scaling::{
    checked_units, is_safe_integer, parse_float_prefix, pow10, round_to_units, scale_decimal,
    scale_f64, units_from_f64, MAX_PRECISION, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER,
};
