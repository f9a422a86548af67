//! Benchmarks comparing Rational64 vs num-rational's Ratio<i64>
//!
//! Run with: cargo bench --bench ratio_benchmarks
//!
//! Both types use 64-bit storage, so the numbers show the cost of read-time
//! reduction and wide intermediates against num-rational's
//! reduce-on-construction design.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_rational::Ratio as NumRatio;
use signed_ratio::{gcd_magnitude, Rational64};

type NumRational = NumRatio<i64>;

// ============================================================================
// BASIC OPERATIONS BENCHMARKS
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("Rational64", |b| {
        b.iter(|| {
            let r = Rational64::new(black_box(12345), black_box(-67890));
            black_box(r.reduced());
        })
    });

    group.bench_function("num-rational", |b| {
        b.iter(|| {
            let r = NumRational::new(black_box(12345), black_box(-67890));
            black_box(r);
        })
    });

    group.finish();
}

fn bench_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    // Same denominator, exact multiple, and coprime denominators
    let test_cases = vec![
        ("same_denom", (1i64, 6i64), (2i64, 6i64)),
        ("multiple_denom", (1i64, 2i64), (1i64, 8i64)),
        ("diff_denom", (1i64, 2i64), (1i64, 3i64)),
        ("large", (999999i64, 1000000i64), (-999998i64, 1000001i64)),
    ];

    for (name, (n1, d1), (n2, d2)) in test_cases {
        let r1 = Rational64::new(n1, d1);
        let r2 = Rational64::new(n2, d2);

        group.bench_with_input(BenchmarkId::new("Rational64", name), &(r1, r2), |b, (r1, r2)| {
            b.iter(|| {
                let result = *r1 + black_box(*r2);
                black_box(result);
            })
        });

        let r1_num = NumRational::new(n1, d1);
        let r2_num = NumRational::new(n2, d2);

        group.bench_with_input(
            BenchmarkId::new("num-rational", name),
            &(r1_num, r2_num),
            |b, (r1, r2)| {
                b.iter(|| {
                    let result = r1 + black_box(r2);
                    black_box(result);
                })
            },
        );
    }

    group.finish();
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");

    let test_cases = vec![
        ("small", (2i64, 3i64), (3i64, 4i64)),
        ("medium", (12345i64, 67890i64), (98765i64, 43210i64)),
        ("large", (999999i64, 1000000i64), (1000000i64, 999999i64)),
    ];

    for (name, (n1, d1), (n2, d2)) in test_cases {
        let r1 = Rational64::new(n1, d1);
        let r2 = Rational64::new(n2, d2);

        group.bench_with_input(BenchmarkId::new("Rational64", name), &(r1, r2), |b, (r1, r2)| {
            b.iter(|| {
                let result = *r1 * black_box(*r2);
                black_box(result);
            })
        });

        let r1_num = NumRational::new(n1, d1);
        let r2_num = NumRational::new(n2, d2);

        group.bench_with_input(
            BenchmarkId::new("num-rational", name),
            &(r1_num, r2_num),
            |b, (r1, r2)| {
                b.iter(|| {
                    let result = r1 * black_box(r2);
                    black_box(result);
                })
            },
        );
    }

    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");

    let r1 = Rational64::new(12345, 67890);
    let r2 = Rational64::new(-98765, 43210);

    group.bench_function("Rational64", |b| {
        b.iter(|| {
            let result = black_box(r1) / black_box(r2);
            black_box(result);
        })
    });

    group.bench_function("Rational64_by_zero", |b| {
        b.iter(|| {
            let result = black_box(r1) / black_box(Rational64::zero());
            black_box(result);
        })
    });

    let r1_num = NumRational::new(12345, 67890);
    let r2_num = NumRational::new(-98765, 43210);

    group.bench_function("num-rational", |b| {
        b.iter(|| {
            let result = black_box(r1_num) / black_box(r2_num);
            black_box(result);
        })
    });

    group.finish();
}

fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcd");

    let test_cases = vec![
        ("small", 48u128, 18u128),
        ("fibonacci", 1134903170u128, 1836311903u128),
        ("large", (i64::MAX as u128) / 7 * 6, (i64::MAX as u128) / 11 * 6),
    ];

    for (name, a, b) in test_cases {
        group.bench_with_input(BenchmarkId::new("gcd_magnitude", name), &(a, b), |bench, &(a, b)| {
            bench.iter(|| black_box(gcd_magnitude(black_box(a), black_box(b))))
        });
    }

    group.finish();
}

// ============================================================================
// REAL-WORLD WORKLOADS
// ============================================================================

/// Harmonic partial sum 1 + 1/2 + ... + 1/20.
fn bench_harmonic_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonic_series");

    group.bench_function("Rational64", |b| {
        b.iter(|| {
            let mut sum = Rational64::zero();
            for k in 1..=black_box(20i64) {
                sum = sum + Rational64::new(1, k);
            }
            black_box(sum);
        })
    });

    group.bench_function("num-rational", |b| {
        b.iter(|| {
            let mut sum = NumRational::from_integer(0);
            for k in 1..=black_box(20i64) {
                sum += NumRational::new(1, k);
            }
            black_box(sum);
        })
    });

    group.finish();
}

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(
    basic_ops,
    bench_construction,
    bench_addition,
    bench_multiplication,
    bench_division,
    bench_gcd
);

criterion_group!(real_world, bench_harmonic_series);

criterion_main!(basic_ops, real_world);
