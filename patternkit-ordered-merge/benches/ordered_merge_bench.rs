// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use patternkit_ordered_merge::{kth_smallest, merge_sorted};
use patternkit_test_utils::random::random_sorted_sequences;
use std::hint::black_box;

pub fn bench_kth_smallest(c: &mut Criterion) {
    let mut group = c.benchmark_group("kth_smallest");

    // Sequence counts (M) to test heap scaling
    let sequence_counts = [4usize, 64, 512];
    let ranks = [1usize, 500];

    for &count in &sequence_counts {
        let sequences = random_sorted_sequences(42, count, 500, 0..1_000_000);
        for &k in &ranks {
            group.throughput(Throughput::Elements(k as u64));
            let id = BenchmarkId::from_parameter(format!("m{count}_k{k}"));
            group.bench_with_input(id, &k, |bencher, &k| {
                bencher.iter(|| {
                    let value = kth_smallest(black_box(&sequences), black_box(k));
                    black_box(value.ok().copied());
                });
            });
        }
    }

    group.finish();
}

pub fn bench_merge_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sorted");

    for &count in &[4usize, 64] {
        let sequences = random_sorted_sequences(7, count, 500, 0..1_000_000);
        let total: usize = sequences.iter().map(Vec::len).sum();

        group.throughput(Throughput::Elements(total as u64));
        let id = BenchmarkId::from_parameter(format!("m{count}"));
        group.bench_with_input(id, &sequences, |bencher, sequences| {
            bencher.iter(|| black_box(merge_sorted(black_box(sequences))));
        });
    }

    group.finish();
}
