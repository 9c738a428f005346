// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use growable::GrowVec;

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench growvec
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Growth
// =============================================================================

fn bench_push_from_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_from_empty");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = GrowVec::new();
                for i in 0..s {
                    vec.push_back(i as u64);
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

fn bench_push_reserved(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_reserved");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u64);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowVec", size), &size, |b, &s| {
            let mut vec = GrowVec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push_back(i as u64);
                }
                black_box(&vec);
            });
        });
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec: Vec<u64> = Vec::new();
                vec.resize(s, 7);
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("GrowVec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec: GrowVec<u64> = GrowVec::new();
                vec.resize(s, &7);
                black_box(vec)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Copy
// =============================================================================

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let vec: Vec<u64> = (0..size as u64).collect();
        let grow_vec: GrowVec<u64> = (0..size as u64).collect();

        group.bench_with_input(BenchmarkId::new("Vec", size), &vec, |b, v| {
            b.iter(|| black_box(v.clone()));
        });

        group.bench_with_input(BenchmarkId::new("GrowVec", size), &grow_vec, |b, v| {
            b.iter(|| black_box(v.clone()));
        });
    }

    group.finish();
}

fn bench_clone_from_in_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_from_in_place");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let source: GrowVec<u64> = (0..size as u64).collect();

        group.bench_with_input(BenchmarkId::new("GrowVec", size), &source, |b, src| {
            b.iter_batched(
                || GrowVec::<u64>::with_capacity(src.len()),
                |mut dst| {
                    dst.clone_from(src);
                    black_box(dst)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_shrink_to_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("shrink_to_fit");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut vec = Vec::with_capacity(s * 2);
                    vec.extend(0..s as u64);
                    vec
                },
                |mut vec| {
                    vec.shrink_to_fit();
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("GrowVec", size), &size, |b, &s| {
            b.iter_batched(
                || {
                    let mut vec = GrowVec::with_capacity(s * 2);
                    vec.extend(0..s as u64);
                    vec
                },
                |mut vec| {
                    vec.shrink_to_fit();
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    growth_benches,
    bench_push_from_empty,
    bench_push_reserved,
    bench_resize
);

criterion_group!(
    copy_benches,
    bench_clone,
    bench_clone_from_in_place,
    bench_shrink_to_fit
);

criterion_main!(growth_benches, copy_benches);
