// ============================================================================
// Amount
// Every input representation accepted by normalization
// ============================================================================

use super::Money;
use rust_decimal::Decimal;
use std::borrow::Cow;

/// An amount as supplied by a caller, before normalization to minor units.
///
/// Numbers and decimals are whole currency units (`19.99`), text is a
/// loosely formatted amount (`"$1,299.00"`, `"(4.50)"`), and `Money` carries
/// units that are taken as-is. `Unsupported` stands for inputs with no
/// numeric meaning such as `None` or `bool`.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount<'a> {
    Money(Money),
    Number(f64),
    Decimal(Decimal),
    Text(Cow<'a, str>),
    Unsupported,
}

impl From<Money> for Amount<'_> {
    fn from(value: Money) -> Self {
        Amount::Money(value)
    }
}

impl From<&Money> for Amount<'_> {
    fn from(value: &Money) -> Self {
        Amount::Money(*value)
    }
}

impl From<Decimal> for Amount<'_> {
    fn from(value: Decimal) -> Self {
        Amount::Decimal(value)
    }
}

impl<'a> From<&'a str> for Amount<'a> {
    fn from(value: &'a str) -> Self {
        Amount::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Amount<'a> {
    fn from(value: &'a String) -> Self {
        Amount::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Amount<'_> {
    fn from(value: String) -> Self {
        Amount::Text(Cow::Owned(value))
    }
}

impl From<bool> for Amount<'_> {
    fn from(_: bool) -> Self {
        Amount::Unsupported
    }
}

impl From<()> for Amount<'_> {
    fn from(_: ()) -> Self {
        Amount::Unsupported
    }
}

impl<'a, T> From<Option<T>> for Amount<'a>
where
    T: Into<Amount<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Amount::Unsupported, Into::into)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount<'_> {
                #[inline]
                fn from(value: $t) -> Self {
                    Amount::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Amount::from(12.5), Amount::Number(12.5));
        assert_eq!(Amount::from(10_i32), Amount::Number(10.0));
        assert_eq!(Amount::from("1.99"), Amount::Text(Cow::Borrowed("1.99")));
        assert_eq!(
            Amount::from("1.99".to_string()),
            Amount::Text(Cow::Owned("1.99".to_string()))
        );
        assert_eq!(
            Amount::from(Decimal::new(199, 2)),
            Amount::Decimal(Decimal::new(199, 2))
        );
    }

    #[test]
    fn test_unsupported_inputs() {
        assert_eq!(Amount::from(true), Amount::Unsupported);
        assert_eq!(Amount::from(()), Amount::Unsupported);
        assert_eq!(Amount::from(None::<f64>), Amount::Unsupported);
        assert_eq!(Amount::from(Some(3.0)), Amount::Number(3.0));
    }
}
