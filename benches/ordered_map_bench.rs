//! Benchmark for the ordered map.
//!
//! Measures insertion, lookup, slicing, set-algebra, and membership
//! checks across map sizes, to keep an eye on the linear-probe cost
//! model as the map grows.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqmap::{Comparator, Key, OrderedMap};
use std::hint::black_box;

fn sequential_map(size: i64) -> OrderedMap<i64> {
    OrderedMap::from_pairs((0..size).map(|index| (index, index * 2)))
}

fn text_keyed_map(size: i64) -> OrderedMap<i64> {
    OrderedMap::from_pairs((0..size).map(|index| (format!("key-{index}"), index)))
}

// =============================================================================
// 1. Construction and Lookup
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = OrderedMap::new();
                for index in 0..size {
                    map.insert(black_box(index), black_box(index * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [10, 100, 1_000] {
        let map = sequential_map(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |bencher, map| {
            bencher.iter(|| {
                // Probe the last key, the worst case for the linear scan.
                black_box(map.get(black_box(size - 1)))
            });
        });
    }

    group.finish();
}

fn benchmark_key_normalization(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("key_normalization");

    group.bench_function("decimal_string", |bencher| {
        bencher.iter(|| black_box(Key::from(black_box("1234567"))));
    });

    group.bench_function("plain_text", |bencher| {
        bencher.iter(|| black_box(Key::from(black_box("hello-world"))));
    });

    group.finish();
}

// =============================================================================
// 2. Slicing
// =============================================================================

fn benchmark_slice(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("slice");

    for size in [100, 1_000] {
        let map = sequential_map(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |bencher, map| {
            bencher.iter(|| black_box(map.slice(black_box(-50..-10))));
        });
    }

    group.finish();
}

// =============================================================================
// 3. Set Algebra
// =============================================================================

fn benchmark_difference(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("difference");

    for size in [10, 100] {
        let left = text_keyed_map(size);
        let right = text_keyed_map(size / 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(left, right),
            |bencher, (left, right)| {
                bencher.iter(|| {
                    black_box(
                        left.difference(right, Comparator::Default, Comparator::Ignored)
                            .unwrap(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn benchmark_intersection(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("intersection");

    for size in [10, 100] {
        let left = text_keyed_map(size);
        let right = text_keyed_map(size / 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(left, right),
            |bencher, (left, right)| {
                bencher.iter(|| {
                    black_box(left.intersection(right, Comparator::Default, Comparator::Default))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// 4. Membership
// =============================================================================

fn benchmark_exact_keys(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("has_exact_keys");

    // Below and above the inline-probe threshold.
    for size in [6, 64] {
        let map = sequential_map(size);
        let expected: Vec<Key> = (0..size).map(Key::from).collect();
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(map, expected),
            |bencher, (map, expected)| {
                bencher.iter(|| black_box(map.has_exact_keys(black_box(expected))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// 5. Range Generation
// =============================================================================

fn benchmark_range(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("range");

    group.bench_function("integer_1000", |bencher| {
        bencher.iter(|| black_box(seqmap::range(black_box(0), black_box(1_000))));
    });

    group.bench_function("real_1000", |bencher| {
        bencher.iter(|| {
            black_box(seqmap::range_by(
                black_box(0.0),
                black_box(100.0),
                black_box(0.1),
            ))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_get,
    benchmark_key_normalization,
    benchmark_slice,
    benchmark_difference,
    benchmark_intersection,
    benchmark_exact_keys,
    benchmark_range,
);
criterion_main!(benches);
