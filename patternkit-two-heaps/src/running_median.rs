// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use patternkit_core::Median;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Median of a stream of values, maintained with two heaps.
///
/// The smaller half lives in a max-heap and the larger half in a min-heap.
/// The max-heap holds either as many values as the min-heap or exactly one
/// more, so the median is always at the top of one or both heaps.
///
/// Insertion is `O(log N)` and reading the median is `O(1)`.
///
/// # Examples
///
/// ```
/// use patternkit_two_heaps::RunningMedian;
///
/// let mut stream = RunningMedian::new();
/// stream.insert(3);
/// stream.insert(1);
/// assert_eq!(stream.median().map(|m| m.cloned().value()), Some(2.0));
/// stream.insert(5);
/// assert_eq!(stream.median().map(|m| m.cloned().value()), Some(3.0));
/// stream.insert(4);
/// assert_eq!(stream.median().map(|m| m.cloned().value()), Some(3.5));
/// ```
#[derive(Debug, Clone)]
pub struct RunningMedian<T> {
    lower: BinaryHeap<T>,
    upper: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> RunningMedian<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
        }
    }

    /// Number of values inserted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Adds a value to the stream.
    pub fn insert(&mut self, value: T) {
        match self.lower.peek() {
            Some(top) if *top < value => self.upper.push(Reverse(value)),
            _ => self.lower.push(value),
        }

        self.rebalance();
    }

    /// Median of every value inserted so far, `None` before the first insert.
    #[must_use]
    pub fn median(&self) -> Option<Median<&T>> {
        let lower = self.lower.peek()?;
        if self.lower.len() > self.upper.len() {
            return Some(Median::Single(lower));
        }

        self.upper
            .peek()
            .map(|Reverse(upper)| Median::Pair(lower, upper))
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
    }

    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(value) = self.lower.pop() {
                self.upper.push(Reverse(value));
                trace!("running_median: moved lower top to upper half");
            }
        } else if self.lower.len() < self.upper.len() {
            if let Some(Reverse(value)) = self.upper.pop() {
                self.lower.push(value);
                trace!("running_median: moved upper top to lower half");
            }
        }
    }
}

impl<T: Ord> Extend<T> for RunningMedian<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for RunningMedian<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stream = Self::new();
        stream.extend(iter);
        stream
    }
}
