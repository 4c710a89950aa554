// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;
use std::collections::HashMap;

/// Strategy used by [`find_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairSearch {
    /// Walk inward from both ends. Requires sorted input, `O(1)` space.
    #[default]
    TwoPointers,
    /// Remember every value seen so far. Accepts unsorted input, `O(N)` space.
    HashMap,
}

/// Finds indices `(i, j)` with `i < j` and `values[i] + values[j] == target`
/// in a non-decreasing slice.
///
/// Sums are computed in `i128`, so they never overflow for any primitive
/// integer up to 64 bits.
///
/// # Examples
///
/// ```
/// use patternkit_two_pointers::pair_with_target_sum;
///
/// assert_eq!(pair_with_target_sum(&[1, 2, 3, 4, 6], 6), Some((1, 3)));
/// assert_eq!(pair_with_target_sum(&[2, 5, 9, 11], 11), Some((0, 2)));
/// assert_eq!(pair_with_target_sum(&[1, 2], 10), None);
/// ```
pub fn pair_with_target_sum<T>(sorted: &[T], target: T) -> Option<(usize, usize)>
where
    T: Copy + Into<i128>,
{
    if sorted.len() < 2 {
        return None;
    }

    let target: i128 = target.into();
    let widened = |index: usize| -> i128 { sorted[index].into() };
    let (mut left, mut right) = (0, sorted.len() - 1);

    while left < right {
        let sum = widened(left) + widened(right);
        match sum.cmp(&target) {
            Ordering::Equal => {
                trace!("pair_with_target_sum: found ({}, {})", left, right);
                return Some((left, right));
            }
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }

    trace!("pair_with_target_sum: no pair in {} values", sorted.len());
    None
}

/// Finds indices `(i, j)` with `i < j` and `values[i] + values[j] == target`
/// in a single pass, without requiring sorted input.
///
/// Returns the first pair completed while scanning left to right; `i` is the
/// latest earlier index holding the complement.
///
/// # Examples
///
/// ```
/// use patternkit_two_pointers::pair_with_target_sum_hashed;
///
/// assert_eq!(pair_with_target_sum_hashed(&[1, 2, 3, 4, 6], 6), Some((1, 3)));
/// assert_eq!(pair_with_target_sum_hashed(&[9, 2, 11, 5], 11), Some((0, 1)));
/// ```
pub fn pair_with_target_sum_hashed<T>(values: &[T], target: T) -> Option<(usize, usize)>
where
    T: Copy + Into<i128>,
{
    let target: i128 = target.into();
    let mut seen: HashMap<i128, usize> = HashMap::with_capacity(values.len());

    for (index, &value) in values.iter().enumerate() {
        let value: i128 = value.into();
        if let Some(&earlier) = seen.get(&(target - value)) {
            trace!("pair_with_target_sum_hashed: found ({}, {})", earlier, index);
            return Some((earlier, index));
        }
        seen.insert(value, index);
    }

    trace!("pair_with_target_sum_hashed: no pair in {} values", values.len());
    None
}

/// Finds a pair summing to `target` with the given strategy.
///
/// `PairSearch::TwoPointers` requires `values` to be sorted.
pub fn find_pair<T>(values: &[T], target: T, strategy: PairSearch) -> Option<(usize, usize)>
where
    T: Copy + Into<i128>,
{
    match strategy {
        PairSearch::TwoPointers => pair_with_target_sum(values, target),
        PairSearch::HashMap => pair_with_target_sum_hashed(values, target),
    }
}
