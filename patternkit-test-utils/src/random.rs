// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// `count` sorted sequences, each of length `0..=max_len`, with values drawn from `values`.
///
/// The same seed always produces the same sequences.
pub fn random_sorted_sequences(
    seed: u64,
    count: usize,
    max_len: usize,
    values: Range<i32>,
) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            let mut items: Vec<i32> = (0..len)
                .map(|_| rng.random_range(values.clone()))
                .collect();
            items.sort_unstable();
            items
        })
        .collect()
}

/// `len` unsorted values drawn from `values`.
pub fn random_values(seed: u64, len: usize, values: Range<i32>) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(values.clone())).collect()
}
