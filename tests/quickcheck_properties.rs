// ============================================================================
// QuickCheck Properties
// Normalization agrees across numeric, decimal and textual inputs
// ============================================================================

use fixed_money::money::normalize::to_units;
use fixed_money::prelude::*;
use quickcheck::{quickcheck, TestResult};
use rust_decimal::Decimal;

quickcheck! {
    // Up to the configured precision the float path never loses a unit. With
    // more digits the exact decimal path can differ (1.005 vs 1.00499..).
    fn decimal_and_text_normalize_alike(mantissa: i32, scale: u8) -> TestResult {
        let scale = u32::from(scale % 3);
        let decimal = Decimal::new(i64::from(mantissa), scale);
        let settings = MoneySettings::default();

        let from_decimal = to_units(decimal, &settings);
        let from_text = to_units(decimal.to_string(), &settings);
        TestResult::from_bool(from_decimal == from_text)
    }

    fn money_input_is_never_rescaled(units: i32, precision: u8) -> bool {
        let settings = MoneySettings::default().with_precision(precision % 8);
        let money = Money::cents(i64::from(units)).unwrap();
        to_units(money, &settings) == Ok(i64::from(units))
    }

    fn noise_characters_are_ignored(units: i32) -> bool {
        let settings = MoneySettings::default();
        let plain = Money::cents(i64::from(units)).unwrap().format_with(&settings);
        let noisy = format!("USD {} total", plain);
        to_units(noisy.as_str(), &settings) == Ok(i64::from(units))
    }

    fn unsupported_input_depends_on_strict_flag(strict: bool) -> bool {
        let settings = MoneySettings::default().with_error_on_invalid(strict);
        let result = to_units(None::<f64>, &settings);
        if strict {
            result == Err(MoneyError::InvalidInput)
        } else {
            result == Ok(0)
        }
    }
}
