use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lloyd::{Clustering, Kmeans, Lloyd, Point};
use rand::prelude::*;

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let d = 16;
    let k = 10;

    let data: Vec<Point> = (0..n)
        .map(|_| Point::new((0..d).map(|_| rng.random::<f64>()).collect()))
        .collect();

    group.bench_function("fit_predict_n1000_d16_k10", |b| {
        b.iter(|| {
            let model = Lloyd::new(k).with_max_iter(10).with_seed(42);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    let mut engine = Kmeans::new();
    engine.add_data(&data);
    engine.random_centroids_seeded(k, 42).unwrap();
    engine.start().unwrap();

    group.bench_function("step_n1000_d16_k10", |b| {
        b.iter(|| {
            let mut km = engine.clone();
            black_box(km.step().unwrap());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_kmeans);
criterion_main!(benches);
