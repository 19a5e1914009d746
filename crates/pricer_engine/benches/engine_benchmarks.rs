//! Criterion benchmarks for the Black-Scholes engine.
//!
//! Measures single-option pricing and the aggregate Greeks pass across
//! a small moneyness grid.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_engine::{BlackScholes, OptionKind, OptionSpec};

fn bench_price(c: &mut Criterion) {
    let engine = BlackScholes::new(0.05_f64);
    let mut group = c.benchmark_group("price");

    for strike in [80.0, 100.0, 120.0] {
        let spec = OptionSpec::new(OptionKind::Call, 100.0, strike, 1.0, 0.2).unwrap();
        group.bench_with_input(BenchmarkId::new("call", strike), &spec, |b, spec| {
            b.iter(|| engine.price(black_box(spec)).unwrap());
        });
    }

    group.finish();
}

fn bench_greeks(c: &mut Criterion) {
    let engine = BlackScholes::new(0.05_f64);
    let spec = OptionSpec::new(OptionKind::Call, 100.0, 100.0, 1.0, 0.2).unwrap();
    let mut group = c.benchmark_group("greeks");

    // Aggregate pass (single d1/d2 evaluation)
    group.bench_function("all_greeks", |b| {
        b.iter(|| engine.greeks(black_box(&spec)).unwrap());
    });

    // Individual calls for comparison
    group.bench_function("individual_greeks", |b| {
        b.iter(|| {
            let spec = black_box(&spec);
            (
                engine.delta(spec).unwrap(),
                engine.gamma(spec).unwrap(),
                engine.vega(spec).unwrap(),
                engine.theta(spec).unwrap(),
                engine.rho(spec).unwrap(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_price, bench_greeks);
criterion_main!(benches);
