// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Two-pointers pattern: find a pair of indices whose values sum to a target.

#[macro_use]
mod logging;

mod target_sum;

pub use target_sum::{find_pair, pair_with_target_sum, pair_with_target_sum_hashed, PairSearch};
