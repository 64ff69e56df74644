// ============================================================================
// Formatting
// Integer minor units -> fixed-point decimal text
// ============================================================================

use crate::config::MoneySettings;

/// Format `units` with exactly `precision` fractional digits.
///
/// The sign is only emitted for negative values and no thousands separator
/// is inserted. Precision 0 prints the integer alone.
///
/// # Examples
/// - 1232 -> "12.32"
/// - -5 -> "-0.05"
/// - 100 -> "1.00"
pub fn format_units(units: i64, settings: &MoneySettings) -> String {
    render(units, settings, None)
}

/// Like [`format_units`] but groups the integer digits in threes with the
/// configured separator (`1234567` -> `"12,345.67"`).
pub fn format_units_grouped(units: i64, settings: &MoneySettings) -> String {
    render(units, settings, Some(settings.separator.as_str()))
}

fn render(units: i64, settings: &MoneySettings, separator: Option<&str>) -> String {
    let scale = settings.scale().unsigned_abs();
    let magnitude = units.unsigned_abs();
    let int_part = (magnitude / scale).to_string();
    let frac_part = magnitude % scale;

    let mut out = String::with_capacity(int_part.len() * 2 + settings.precision as usize + 2);
    if units < 0 {
        out.push('-');
    }

    match separator {
        Some(sep) if !sep.is_empty() => {
            for (i, digit) in int_part.chars().enumerate() {
                if i > 0 && (int_part.len() - i) % 3 == 0 {
                    out.push_str(sep);
                }
                out.push(digit);
            }
        },
        _ => out.push_str(&int_part),
    }

    if settings.precision > 0 {
        out.push(settings.decimal);
        out.push_str(&format!(
            "{:0>width$}",
            frac_part,
            width = settings.precision as usize
        ));
    }

    out
}
