use bimeans_rs::{pairwise_distances, Backend, GroupingConfig, Point, PointGrouper};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use std::time::Duration;

fn random_points(n_points: usize) -> Vec<Point> {
    let data = Array2::random((n_points, 2), Uniform::new(0.0f64, 500.0));
    data.outer_iter()
        .map(|row| Point::new(row[0], row[1]))
        .collect()
}

const SEEDS: [Point; 2] = [Point::new(100.0, 100.0), Point::new(400.0, 400.0)];

fn benchmark_grouping_varying_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping_points");
    group.sample_size(20);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    for n_points in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*n_points as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_points),
            n_points,
            |b, &n_points| {
                let points = random_points(n_points);
                let grouper = PointGrouper::new();

                b.iter(|| grouper.group_points(black_box(&points), &SEEDS).unwrap());
            },
        );
    }
    group.finish();
}

fn benchmark_grouping_varying_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping_rounds");
    group.sample_size(20);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let points = random_points(2_000);
    for rounds in [1, 5, 10, 25].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(rounds), rounds, |b, &rounds| {
            let grouper = PointGrouper::with_config(GroupingConfig::new(rounds));
            b.iter(|| grouper.group_points(black_box(&points), &SEEDS).unwrap());
        });
    }
    group.finish();
}

fn benchmark_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping_backend");
    group.sample_size(20);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let points = random_points(50_000);
    for (name, backend) in [("serial", Backend::Serial), ("parallel", Backend::Parallel)] {
        group.bench_function(name, |b| {
            let grouper = PointGrouper::with_config(GroupingConfig::new(5).with_backend(backend));
            b.iter(|| grouper.group_points(black_box(&points), &SEEDS).unwrap());
        });
    }
    group.finish();
}

fn benchmark_distances(c: &mut Criterion) {
    let refs = Array2::random((2, 2), Uniform::new(0.0f64, 500.0));
    let queries = Array2::random((10_000, 2), Uniform::new(0.0f64, 500.0));

    c.bench_function("pairwise_distances_10k", |b| {
        b.iter(|| pairwise_distances(black_box(&refs.view()), black_box(&queries.view())).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_grouping_varying_points,
    benchmark_grouping_varying_rounds,
    benchmark_backends,
    benchmark_distances
);
criterion_main!(benches);
