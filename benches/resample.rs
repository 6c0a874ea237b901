use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pearson_resample::{
    bootstrap_pearsonr, bootstrap_pearsonr_mwu, permutation_pearsonr, ResampleConfig,
};

fn bench_resample(c: &mut Criterion) {
    let y_true: Vec<f64> = (0..200).map(|i| (i as f64 * 0.37).sin() + i as f64 / 50.0).collect();
    let y_pred: Vec<f64> = y_true
        .iter()
        .enumerate()
        .map(|(i, v)| v + ((i * 31) % 17) as f64 / 20.0)
        .collect();
    let y_alt: Vec<f64> = y_true
        .iter()
        .enumerate()
        .map(|(i, v)| v + ((i * 13) % 23) as f64 / 5.0)
        .collect();
    let config = ResampleConfig::default();

    let mut group = c.benchmark_group("pearson_resample");
    group.sample_size(20);
    group.bench_function("bootstrap_n200", |b| {
        b.iter(|| black_box(bootstrap_pearsonr(&y_true, &y_pred, &config)))
    });
    group.bench_function("permutation_n200", |b| {
        b.iter(|| black_box(permutation_pearsonr(&y_true, &y_pred, &config)))
    });
    group.bench_function("comparison_n200", |b| {
        b.iter(|| black_box(bootstrap_pearsonr_mwu(&y_true, &y_pred, &y_alt, &config)))
    });
    group.finish();
}

criterion_group!(benches, bench_resample);
criterion_main!(benches);
