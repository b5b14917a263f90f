//! Benchmark for the array traversal engine.
//!
//! Compares the sequential and parallel disciplines over synchronous and
//! asynchronous kinds.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use effectual::effect::{AsyncIO, IO, IOEither, IOEitherKind, TaskEither, TaskEitherKind};
use effectual::typeclass::{Applicative, Monad, OptionKind, Sequential};
use std::hint::black_box;
use std::time::Duration;

const SIZES: [usize; 3] = [10, 100, 1_000];

// =============================================================================
// Synchronous Kinds
// =============================================================================

fn benchmark_option_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("option_traversal");

    for size in SIZES {
        let items: Vec<usize> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("sequential", size), &items, |bencher, items| {
            bencher.iter(|| OptionKind::traverse_array(black_box(items.clone()), |n: usize| Some(n * 2)));
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &items, |bencher, items| {
            bencher.iter(|| OptionKind::traverse_array_par(black_box(items.clone()), |n: usize| Some(n * 2)));
        });
    }

    group.finish();
}

fn benchmark_io_either_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("io_either_traversal");

    for size in SIZES {
        let items: Vec<usize> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("sequential", size), &items, |bencher, items| {
            bencher.iter(|| {
                let traversal = IOEitherKind::<String>::traverse_array(black_box(items.clone()), |n: usize| {
                    IOEither::right_kind(IO::new(move || n + 1))
                });
                black_box(traversal.run().run_unsafe())
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &items, |bencher, items| {
            bencher.iter(|| {
                let traversal = IOEitherKind::<String>::traverse_array_par(black_box(items.clone()), |n: usize| {
                    IOEither::right_kind(IO::new(move || n + 1))
                });
                black_box(traversal.run().run_unsafe())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Asynchronous Kinds
// =============================================================================

fn benchmark_task_either_traversal(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("benchmark runtime");
    let mut group = criterion.benchmark_group("task_either_traversal");
    group.sample_size(20);

    let items: Vec<u64> = (0..20).collect();
    let step = |n: u64| TaskEither::<String, u64>::right_kind(AsyncIO::pure(n).delay(Duration::from_micros(50)));

    group.bench_function("parallel", |bencher| {
        bencher
            .to_async(&runtime)
            .iter(|| TaskEitherKind::<String>::traverse_array_par(items.clone(), step).run());
    });

    group.bench_function("sequential_adapter", |bencher| {
        bencher
            .to_async(&runtime)
            .iter(|| Sequential::<TaskEitherKind<String>>::traverse_array_par(items.clone(), step).run());
    });

    group.bench_function("sequential", |bencher| {
        bencher
            .to_async(&runtime)
            .iter(|| TaskEitherKind::<String>::traverse_array(items.clone(), step).run());
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_option_traversal,
    benchmark_io_either_traversal,
    benchmark_task_either_traversal
);
criterion_main!(benches);
