// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Concatenates every sequence and sorts the result.
pub fn sorted_concat<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    let mut all: Vec<T> = sequences
        .iter()
        .flat_map(|items| items.as_ref().iter().cloned())
        .collect();
    all.sort();
    all
}

/// Median of an unsorted slice as `f64`, or `None` when empty.
pub fn median_of<T>(values: &[T]) -> Option<f64>
where
    T: Ord + Copy + Into<f64>,
{
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid].into())
    } else {
        Some(sorted[mid - 1].into() / 2.0 + sorted[mid].into() / 2.0)
    }
}

/// Every `(i, j)` with `i < j` whose values sum to `target`.
pub fn all_pairs_with_sum(values: &[i64], target: i64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            if i128::from(values[i]) + i128::from(values[j]) == i128::from(target) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
