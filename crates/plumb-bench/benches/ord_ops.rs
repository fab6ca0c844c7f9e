//! Criterion micro-benchmarks for relation checking and sweeps.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plumb_bench::{calendar_values, full_calendar_config};
use plumb_ord::{check_relations, sweep_days, sweep_months, RelationExpectation, SweepConfig};

fn bench_check_relations(c: &mut Criterion) {
    let values = calendar_values();
    c.bench_function("check_relations_pairwise_372", |b| {
        b.iter(|| {
            let mut passed = 0usize;
            for a in &values {
                for bv in &values {
                    let expectation = RelationExpectation::new(a == bv, a < bv);
                    if check_relations(a, bv, expectation).is_ok() {
                        passed += 1;
                    }
                }
            }
            black_box(passed)
        });
    });
}

fn bench_default_sweeps(c: &mut Criterion) {
    c.bench_function("sweep_months_default", |b| {
        let config = SweepConfig::default();
        b.iter(|| black_box(sweep_months(&config).is_clean()));
    });
    c.bench_function("sweep_days_default", |b| {
        let config = SweepConfig::default();
        b.iter(|| black_box(sweep_days(&config).is_clean()));
    });
}

fn bench_full_calendar_sweeps(c: &mut Criterion) {
    c.bench_function("sweep_full_calendar", |b| {
        let config = full_calendar_config();
        b.iter(|| {
            let months = sweep_months(&config);
            let days = sweep_days(&config);
            black_box(months.is_clean() && days.is_clean())
        });
    });
}

criterion_group!(
    benches,
    bench_check_relations,
    bench_default_sweeps,
    bench_full_calendar_sweeps
);
criterion_main!(benches);
