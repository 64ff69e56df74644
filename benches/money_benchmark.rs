// ============================================================================
// Money Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Normalization - numbers, decimals and text to minor units
// 2. Arithmetic - integer add and float-factor multiply/percent
// 3. Formatting - plain and grouped output
// 4. Global settings - cost of the per-call settings snapshot
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_money::money::{format_units, format_units_grouped, to_units};
use fixed_money::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// Normalization Benchmarks
// ============================================================================

fn benchmark_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let settings = MoneySettings::default();

    group.bench_function("number", |b| {
        b.iter(|| black_box(to_units(black_box(12.315), &settings)))
    });

    group.bench_function("decimal", |b| {
        let value = Decimal::new(12315, 3);
        b.iter(|| black_box(to_units(black_box(value), &settings)))
    });

    for text in ["19.99", "$1,299.99", "(1,234,567.89)", "USD 12.315 due"] {
        group.bench_with_input(BenchmarkId::new("text", text), &text, |b, text| {
            b.iter(|| black_box(to_units(*text, &settings)))
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let settings = MoneySettings::default();
    let price = Money::cents(1999).unwrap();
    let fee = Money::cents(35).unwrap();

    group.bench_function("add_money", |b| {
        b.iter(|| black_box(ops::add(black_box(price), black_box(fee), &settings)))
    });

    group.bench_function("add_text", |b| {
        b.iter(|| black_box(ops::add(black_box(price), "0.35", &settings)))
    });

    group.bench_function("multiply", |b| {
        b.iter(|| black_box(ops::multiply(black_box(price), 3, &settings)))
    });

    group.bench_function("percent", |b| {
        b.iter(|| black_box(ops::percent(black_box(price), 8.25, &settings)))
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    let settings = MoneySettings::default();

    for units in [7i64, 1232, 123_456_789_012] {
        group.bench_with_input(BenchmarkId::new("plain", units), &units, |b, units| {
            b.iter(|| black_box(format_units(*units, &settings)))
        });
        group.bench_with_input(BenchmarkId::new("grouped", units), &units, |b, units| {
            b.iter(|| black_box(format_units_grouped(*units, &settings)))
        });
    }

    group.finish();
}

// ============================================================================
// Global Settings Benchmarks
// Methods on Money snapshot the global settings once per call
// ============================================================================

fn benchmark_global_snapshot(c: &mut Criterion) {
    let price = Money::cents(1999).unwrap();

    c.bench_function("method_add_with_snapshot", |b| {
        b.iter(|| black_box(black_box(price).add(black_box(price))))
    });

    c.bench_function("display_with_snapshot", |b| {
        b.iter(|| black_box(black_box(price).to_string()))
    });
}

criterion_group!(
    benches,
    benchmark_normalization,
    benchmark_arithmetic,
    benchmark_formatting,
    benchmark_global_snapshot,
);
criterion_main!(benches);
