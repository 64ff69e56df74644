// ============================================================================
// Normalization
// Any accepted amount -> signed integer count of minor units
// ============================================================================

use super::Amount;
use crate::config::MoneySettings;
use crate::numeric::{parse_float_prefix, scale_decimal, scale_f64, MoneyError, MoneyResult};

/// Convert an amount to minor units under `settings`.
///
/// - `Money` keeps its units unchanged (no rescaling)
/// - finite numbers and decimals are scaled by 10^precision
/// - text is cleaned with [`clean_text`] and parsed, unparseable text is zero
/// - non-finite numbers and unsupported input are zero, or `InvalidInput`
///   when `error_on_invalid` is set
///
/// # Errors
/// - `InvalidInput` for unsupported input in strict mode
/// - `InvalidConstruction` if the scaled value leaves the safe range
pub fn to_units<'a>(amount: impl Into<Amount<'a>>, settings: &MoneySettings) -> MoneyResult<i64> {
    match amount.into() {
        Amount::Money(money) => Ok(money.units()),
        Amount::Number(value) if value.is_finite() => scale_f64(value, settings.precision),
        Amount::Decimal(value) => scale_decimal(value, settings.precision),
        Amount::Text(text) => scale_f64(parse_text(&text, settings.decimal), settings.precision),
        Amount::Number(_) | Amount::Unsupported => {
            if settings.error_on_invalid {
                return Err(MoneyError::InvalidInput);
            }
            tracing::trace!("Unsupported money input treated as zero");
            Ok(0)
        },
    }
}

/// Parse a textual amount to a float, falling back to zero.
pub fn parse_text(text: &str, decimal: char) -> f64 {
    let cleaned = clean_text(text, decimal);
    match parse_float_prefix(&cleaned) {
        Some(value) => value,
        None => {
            tracing::trace!(input = text, "Unparseable money text treated as zero");
            0.0
        },
    }
}

/// Reduce a textual amount to a plain float literal.
///
/// 1. `(N)` becomes `-N` (accounting negatives), spanning the first `(` to
///    the last `)` after it
/// 2. everything except ASCII digits, `-` and `decimal` is dropped
/// 3. `decimal` becomes `.`
///
/// # Examples
/// - "$1,299.99" -> "1299.99"
/// - "(1.99)" -> "-1.99"
/// - "1.234,56" with `decimal = ','` -> "1234.56"
pub fn clean_text(text: &str, decimal: char) -> String {
    let text = rewrite_parentheses(text);
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == decimal)
        .map(|c| if c == decimal { '.' } else { c })
        .collect()
}

fn rewrite_parentheses(text: &str) -> std::borrow::Cow<'_, str> {
    let Some(open) = text.find('(') else {
        return text.into();
    };
    match text[open + 1..].rfind(')') {
        Some(offset) => {
            let close = open + 1 + offset;
            format!("{}-{}{}", &text[..open], &text[open + 1..close], &text[close + 1..]).into()
        },
        None => text.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use rust_decimal::Decimal;

    fn defaults() -> MoneySettings {
        MoneySettings::default()
    }

    #[test]
    fn test_numbers() {
        assert_eq!(to_units(19.99, &defaults()), Ok(1999));
        assert_eq!(to_units(10, &defaults()), Ok(1000));
        assert_eq!(to_units(12.315, &defaults()), Ok(1232));
        assert_eq!(to_units(-0.5, &defaults()), Ok(-50));
    }

    #[test]
    fn test_money_is_not_rescaled() {
        let money = Money::cents(1232).unwrap();
        let settings = defaults().with_precision(4);
        assert_eq!(to_units(money, &settings), Ok(1232));
        assert_eq!(to_units(&money, &settings), Ok(1232));
    }

    #[test]
    fn test_text() {
        assert_eq!(to_units("19.99", &defaults()), Ok(1999));
        assert_eq!(to_units("$1,299.99", &defaults()), Ok(129_999));
        assert_eq!(to_units("(1.99)", &defaults()), Ok(-199));
        assert_eq!(to_units("-1.99", &defaults()), Ok(-199));
        assert_eq!(to_units("  12.315 USD", &defaults()), Ok(1232));
    }

    #[test]
    fn test_text_with_custom_decimal() {
        let settings = defaults().with_decimal(',').with_separator(".");
        assert_eq!(to_units("1.234,56", &settings), Ok(123_456));
        assert_eq!(to_units("(0,5)", &settings), Ok(-50));
    }

    #[test]
    fn test_unparseable_text_is_zero() {
        assert_eq!(to_units("abc", &defaults()), Ok(0));
        assert_eq!(to_units("", &defaults()), Ok(0));
        assert_eq!(to_units("-", &defaults()), Ok(0));

        let strict = defaults().with_error_on_invalid(true);
        assert_eq!(to_units("abc", &strict), Ok(0));
    }

    #[test]
    fn test_unsupported_input() {
        assert_eq!(to_units(None::<f64>, &defaults()), Ok(0));
        assert_eq!(to_units(true, &defaults()), Ok(0));
        assert_eq!(to_units(f64::NAN, &defaults()), Ok(0));

        let strict = defaults().with_error_on_invalid(true);
        assert_eq!(to_units(None::<f64>, &strict), Err(MoneyError::InvalidInput));
        assert_eq!(to_units(false, &strict), Err(MoneyError::InvalidInput));
        assert_eq!(to_units(f64::INFINITY, &strict), Err(MoneyError::InvalidInput));
    }

    #[test]
    fn test_decimal_input() {
        assert_eq!(to_units(Decimal::new(12315, 3), &defaults()), Ok(1232));
        assert_eq!(to_units(Decimal::new(-199, 2), &defaults()), Ok(-199));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            to_units(1e300, &defaults()),
            Err(MoneyError::InvalidConstruction)
        );
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("$1,299.99", '.'), "1299.99");
        assert_eq!(clean_text("(1.99)", '.'), "-1.99");
        assert_eq!(clean_text("USD (12.00) due", '.'), "-12.00");
        assert_eq!(clean_text("1.234,56", ','), "1234.56");
        assert_eq!(clean_text("(1.99", '.'), "1.99");
    }
}
