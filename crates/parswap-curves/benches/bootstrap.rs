//! Benchmarks for the dual-curve bootstrap.
//!
//! Run with: cargo bench -p parswap-curves

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use parswap_core::Date;
use parswap_curves::bootstrap::{BootstrapConfig, CurveBootstrapper};
use parswap_curves::interpolation::InterpolationMethod;
use parswap_curves::quotes::MarketQuotes;
use parswap_math::solvers::SolverKind;

fn bench_bootstrap(c: &mut Criterion) {
    let trade = Date::from_ymd(2026, 1, 7).unwrap();
    let quotes = MarketQuotes::sample();

    let mut group = c.benchmark_group("bootstrap");

    let newton = CurveBootstrapper::new(trade);
    group.bench_function("linear_newton", |b| {
        b.iter(|| newton.bootstrap(black_box(&quotes), black_box(-38.0)))
    });

    let bisection = CurveBootstrapper::new(trade)
        .with_config(BootstrapConfig::default().with_solver(SolverKind::Bisection));
    group.bench_function("linear_bisection", |b| {
        b.iter(|| bisection.bootstrap(black_box(&quotes), black_box(-38.0)))
    });

    let spline = CurveBootstrapper::new(trade).with_config(
        BootstrapConfig::default()
            .with_interpolation(InterpolationMethod::CubicSpline)
            .with_short_end_anchor(true),
    );
    group.bench_function("spline_newton", |b| {
        b.iter(|| spline.bootstrap(black_box(&quotes), black_box(-38.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_bootstrap);
criterion_main!(benches);
