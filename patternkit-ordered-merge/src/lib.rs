// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! K-way merge over sorted sequences.
//!
//! A min-heap frontier keeps one cursor per input sequence. Popping the
//! smallest cursor and pushing its successor yields the global sort order
//! lazily, which is enough to answer "k-th smallest", "full merge" and
//! "median" without materializing the merged output.

#[macro_use]
mod logging;

mod kth_smallest;
mod ordered_merge;

pub use kth_smallest::{kth_smallest, median, merge_sorted};
pub use ordered_merge::{OrderedMerge, OrderedMergeExt};
