use criterion::{criterion_group, criterion_main, Criterion};
use mda_fit::fit_indexed;

fn make_series(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 0.35 * i as f64 + ((i % 7) as f64 - 3.0) * 0.01)
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let series = make_series(250_000);
    c.bench_function("fit_throughput", |b| {
        b.iter(|| {
            let _ = fit_indexed(&series).expect("fit");
        });
    });
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
