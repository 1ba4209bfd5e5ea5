use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ei_core::Real;
use ei_prob::{DiscreteSample, Distribution, Sample, operators};
use std::hint::black_box;

fn uniform_ints(n: i64) -> DiscreteSample<i64> {
    let p = 1.0 / n as f64;
    (0..n).map(|v| (v, p)).collect()
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine_add_integers");
    for n in [8_i64, 64, 256] {
        let left = uniform_ints(n);
        let right = uniform_ints(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(operators::add(&left, &right).unwrap()))
        });
    }
    group.finish();

    let flips: Vec<DiscreteSample<bool>> =
        (1..=32).map(|i| DiscreteSample::new().add(true, i as f64 / 33.0).add(false, 1.0 - i as f64 / 33.0)).collect();
    c.bench_function("and_chain_32", |b| {
        b.iter(|| {
            let mut acc = DiscreteSample::create(true);
            for f in &flips {
                acc = operators::and(&acc, f);
            }
            black_box(acc)
        })
    });
}

fn bench_less_than_continuous(c: &mut Criterion) {
    let Sample::Continuous(cs) = Distribution::normal(100.0, 15.0).sample() else {
        unreachable!("normal samples are continuous")
    };
    let thresholds: DiscreteSample<Real> = (0..1_000).map(|i| (Real(50.0 + i as f64 * 0.1), 1e-3)).collect();

    c.bench_function("less_than_continuous_1k", |b| {
        b.iter(|| black_box(operators::less_than_continuous(&cs, &thresholds)))
    });
}

criterion_group!(benches, bench_combine, bench_less_than_continuous);
criterion_main!(benches);
