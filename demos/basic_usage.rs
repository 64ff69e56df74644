// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_money::prelude::*;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixed Money Example ===\n");

    // Parse loosely formatted amounts
    let price = Money::from_amount("$19.99")?;
    let refund = Money::from_amount("(4.50)")?;
    let rounded = Money::from_amount(12.315)?;

    println!("Price:   {} ({} units)", price, price.units());
    println!("Refund:  {} ({} units)", refund, refund.units());
    println!("Rounded: {} ({} units)", rounded, rounded.units());

    // Arithmetic returns new values
    println!("\n=== Invoice ===");
    let subtotal = price.multiply(3)?.add(refund)?;
    let tax = subtotal.percent(8.25)?;
    let total = subtotal.add(tax)?;
    println!("Subtotal: {}", subtotal);
    println!("Tax:      {}", tax);
    println!("Total:    {}", total);

    let share = total.divide(3)?;
    println!("Split three ways: {} each", share);
    println!(
        "Rounding drift:   {} units",
        share.multiply(3)?.units() - total.units()
    );

    // Explicit settings never touch the global store
    println!("\n=== Explicit Settings ===");
    let european = MoneySettings::default()
        .with_decimal(',')
        .with_separator(".");
    let big = Money::from_amount_with("1.234.567,89", &european)?;
    println!(
        "{} -> {}",
        big.format_with(&european),
        fixed_money::money::format_units_grouped(big.units(), &european)
    );

    // Global settings change how existing values are displayed
    println!("\n=== Global Precision ===");
    let units = Money::cents(1232)?;
    println!("precision 2: {}", units);
    Money::set_settings(SettingsOverrides::new().precision(3))?;
    println!("precision 3: {}", units);
    Money::reset_settings();

    // Strict parsing
    println!("\n=== Strict Parsing ===");
    Money::set_settings(SettingsOverrides::new().error_on_invalid(true))?;
    match Money::from_amount(None::<f64>) {
        Ok(value) => println!("None -> {}", value),
        Err(e) => println!("None -> error: {}", e),
    }
    println!("\"abc\" -> {}", Money::from_amount("abc")?);
    Money::reset_settings();

    Ok(())
}
