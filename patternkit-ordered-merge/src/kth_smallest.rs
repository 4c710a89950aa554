// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ordered_merge::OrderedMerge;
use patternkit_core::Median;
use patternkit_error::{PatternError, Result};

/// Returns the `k`-th smallest value (1-indexed) across all sorted sequences.
///
/// Merging stops as soon as the `k`-th value is produced, so the cost is
/// `O(k log M)` regardless of how long the sequences are.
///
/// # Errors
///
/// - [`PatternError::InvalidArgument`] if `k == 0`.
/// - [`PatternError::OutOfRange`] if `k` exceeds the total number of elements.
///
/// # Examples
///
/// ```
/// use patternkit_ordered_merge::kth_smallest;
///
/// let sequences = [vec![2, 6, 8], vec![3, 6, 7], vec![1, 3, 4]];
/// assert_eq!(kth_smallest(&sequences, 5).unwrap(), &4);
/// ```
pub fn kth_smallest<T, S>(sequences: &[S], k: usize) -> Result<&T>
where
    T: Ord,
    S: AsRef<[T]>,
{
    if k == 0 {
        debug!("kth_smallest: rejected k = 0");
        return Err(PatternError::invalid_argument(
            "k must be at least 1, ranks are 1-indexed",
        ));
    }

    let mut merge = OrderedMerge::new(sequences);
    match merge.nth(k - 1) {
        Some(value) => {
            trace!("kth_smallest: found rank {} after {} emissions", k, merge.emitted());
            Ok(value)
        }
        None => Err(PatternError::out_of_range(k, merge.emitted())),
    }
}

/// Merges all sorted sequences into a single non-decreasing `Vec`.
///
/// Equal values keep sequence-index order.
///
/// # Examples
///
/// ```
/// use patternkit_ordered_merge::merge_sorted;
///
/// let sequences = [vec![1, 4, 7], vec![2, 5], vec![3, 6]];
/// assert_eq!(merge_sorted(&sequences), vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
#[must_use]
pub fn merge_sorted<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    OrderedMerge::new(sequences).cloned().collect()
}

/// Returns the median across all sorted sequences.
///
/// With `N` elements in total, an odd `N` yields the element of rank `⌈N/2⌉`
/// and an even `N` yields the pair of ranks `N/2` and `N/2 + 1`. Both ranks are
/// read from a single merge pass.
///
/// # Errors
///
/// Returns [`PatternError::OutOfRange`] if the sequences hold no elements.
///
/// # Examples
///
/// ```
/// use patternkit_core::Median;
/// use patternkit_ordered_merge::median;
///
/// let sequences = [vec![1, 3], vec![2, 4]];
/// assert_eq!(median(&sequences).unwrap(), Median::Pair(&2, &3));
/// assert_eq!(median(&sequences).unwrap().cloned().value(), 2.5);
/// ```
pub fn median<T, S>(sequences: &[S]) -> Result<Median<&T>>
where
    T: Ord,
    S: AsRef<[T]>,
{
    let mut merge = OrderedMerge::new(sequences);
    let total = merge.len();
    if total == 0 {
        return Err(PatternError::out_of_range(1, 0));
    }

    let lower_rank = total.div_ceil(2);
    let lower = merge
        .nth(lower_rank - 1)
        .ok_or_else(|| PatternError::out_of_range(lower_rank, total))?;

    if total % 2 == 1 {
        return Ok(Median::Single(lower));
    }

    let upper = merge
        .next()
        .ok_or_else(|| PatternError::out_of_range(lower_rank + 1, total))?;

    Ok(Median::Pair(lower, upper))
}
