//! Benchmarks for geo crate distance calculations and traversals.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greatcircle_geo::{
    calculate_distances_sorted, haversine_distance_meters, Coordinate, Point, PointList, SortDirection,
};

fn create_test_points(count: usize) -> Vec<Arc<Point<usize>>> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around Berlin
            let lat = 52.0 + (i as f64 * 0.01) % 2.0;
            let lng = 13.0 + (i as f64 * 0.013) % 2.0;
            Arc::new(Point::with_payload(lat, lng, i))
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let berlin = Coordinate::new(52.5200, 13.4050);
    let paris = Coordinate::new(48.8566, 2.3522);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance_meters(black_box(&berlin), black_box(&paris)))
    });
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_list_traversal");
    let reference = Arc::new(Point::with_payload(50.0, 10.0, usize::MAX));

    for size in [10, 50, 250].iter() {
        let mut list = PointList::from_points(create_test_points(*size)).expect("valid grid");
        list.sort_by_distance_to(reference.clone(), SortDirection::Asc)
            .expect("valid reference");

        group.bench_with_input(BenchmarkId::new("to_vec", size), size, |b, _| {
            b.iter(|| black_box(&list).to_vec())
        });
        group.bench_with_input(BenchmarkId::new("take_5", size), size, |b, _| {
            b.iter(|| black_box(&list).take(5))
        });
    }

    group.finish();
}

fn bench_batch_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_sorted");
    let from = Point::with_payload(50.0, 10.0, usize::MAX);

    for size in [100, 1000, 10000].iter() {
        let points = create_test_points(*size);

        group.bench_with_input(BenchmarkId::new("asc", size), size, |b, _| {
            b.iter(|| calculate_distances_sorted(black_box(&from), black_box(&points), SortDirection::Asc, None))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_traversal, bench_batch_sorted);
criterion_main!(benches);
