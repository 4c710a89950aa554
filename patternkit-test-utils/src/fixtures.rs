// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// `[[2,6,8],[3,6,7],[1,3,4]]`, merged: `[1,2,3,3,4,6,6,7,8]`.
pub fn three_sequences() -> Vec<Vec<i32>> {
    vec![vec![2, 6, 8], vec![3, 6, 7], vec![1, 3, 4]]
}

/// `[[5,8,9],[1,7]]`, merged: `[1,5,7,8,9]`.
pub fn two_sequences() -> Vec<Vec<i32>> {
    vec![vec![5, 8, 9], vec![1, 7]]
}

/// A single sequence: `[[1,2,3,4,6]]`.
pub fn single_sequence() -> Vec<Vec<i32>> {
    vec![vec![1, 2, 3, 4, 6]]
}

/// Two empty sequences.
pub fn empty_sequences() -> Vec<Vec<i32>> {
    vec![Vec::new(), Vec::new()]
}

/// `[[1,4,7],[2,5],[3,6]]`, merged: `[1..=7]`.
pub fn interleaved_sequences() -> Vec<Vec<i32>> {
    vec![vec![1, 4, 7], vec![2, 5], vec![3, 6]]
}

/// Inserts `3, 1, 5, 4` with the running median after each step.
pub fn number_stream() -> Vec<(i32, f64)> {
    vec![(3, 3.0), (1, 2.0), (5, 3.0), (4, 3.5)]
}

/// `(sorted values, target, expected pair)`
pub fn target_sum_cases() -> Vec<(Vec<i64>, i64, (usize, usize))> {
    vec![
        (vec![1, 2, 3, 4, 6], 6, (1, 3)),
        (vec![2, 5, 9, 11], 11, (0, 2)),
    ]
}
