// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Two-heaps pattern: running median of a number stream.

#[macro_use]
mod logging;

mod running_median;

pub use patternkit_core::Median;
pub use running_median::RunningMedian;
