// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # patternkit
//!
//! Classic interview patterns as small, generic algorithms over borrowed input.
//!
//! ## Overview
//!
//! - **K-way merge** ([`OrderedMerge`], [`kth_smallest`], [`merge_sorted`], [`median`]):
//!   a min-heap frontier with one cursor per sorted input sequence.
//! - **Two heaps** ([`RunningMedian`]): median of a stream in `O(log N)` per insert.
//! - **Two pointers** ([`pair_with_target_sum`], [`find_pair`]): indices of a pair
//!   summing to a target.
//!
//! The three patterns are independent; they share only [`PatternError`] and [`Median`].
//!
//! ## Logging
//!
//! Enable the `tracing` feature to emit `tracing` events from every algorithm crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use patternkit::prelude::*;
//!
//! let sequences = [vec![2, 6, 8], vec![3, 6, 7], vec![1, 3, 4]];
//! assert_eq!(kth_smallest(&sequences, 5), Ok(&4));
//!
//! let stream: RunningMedian<i32> = [3, 1, 5, 4].into_iter().collect();
//! assert_eq!(stream.median().map(|m| m.cloned().value()), Some(3.5));
//!
//! assert_eq!(pair_with_target_sum(&[1, 2, 3, 4, 6], 6), Some((1, 3)));
//! ```

pub use patternkit_core::Median;
pub use patternkit_error::{PatternError, Result};
pub use patternkit_ordered_merge::{kth_smallest, median, merge_sorted, OrderedMerge, OrderedMergeExt};
pub use patternkit_two_heaps::RunningMedian;
pub use patternkit_two_pointers::{
    find_pair, pair_with_target_sum, pair_with_target_sum_hashed, PairSearch,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        find_pair, kth_smallest, median, merge_sorted, pair_with_target_sum,
        pair_with_target_sum_hashed, Median, OrderedMerge, OrderedMergeExt, PairSearch,
        PatternError, RunningMedian,
    };
}
