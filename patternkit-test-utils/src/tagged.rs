// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::Ordering;
use std::fmt::{self, Display};

/// A value that is ordered by `key` only; `origin` rides along untouched.
///
/// Two `Tagged` values with the same key compare equal, which makes the
/// order in which equal elements are produced observable.
#[derive(Debug, Clone, Copy)]
pub struct Tagged {
    pub key: i32,
    pub origin: usize,
}

impl Tagged {
    #[must_use]
    pub const fn new(key: i32, origin: usize) -> Self {
        Self { key, origin }
    }
}

/// Tags every value of every sequence with the index of its sequence.
pub fn tag_sequences(sequences: &[Vec<i32>]) -> Vec<Vec<Tagged>> {
    sequences
        .iter()
        .enumerate()
        .map(|(origin, items)| items.iter().map(|&key| Tagged::new(key, origin)).collect())
        .collect()
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tagged[key={}, origin={}]", self.key, self.origin)
    }
}
