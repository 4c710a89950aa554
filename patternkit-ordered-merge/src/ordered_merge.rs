// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::iter::FusedIterator;

/// Next unconsumed element of one input sequence.
#[derive(Debug)]
struct Cursor<'a, T> {
    sequence: usize,
    position: usize,
    value: &'a T,
}

// Ordered by value, ties broken by sequence index so output is reproducible.
impl<T: Ord> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(other.value)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<T: Ord> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for Cursor<'_, T> {}

/// Lazy k-way merge over already sorted sequences.
///
/// Yields every element of every input in non-decreasing order, one at a time.
/// The frontier holds at most one cursor per input sequence, so each step
/// costs `O(log M)` for `M` sequences and the merge uses `O(M)` extra space.
/// Equal values are yielded in sequence-index order.
///
/// The inputs are only borrowed; independent merges over the same sequences
/// can run on different threads at the same time.
///
/// # Examples
///
/// ```
/// use patternkit_ordered_merge::OrderedMerge;
///
/// let sequences = [vec![1, 4, 7], vec![2, 5], vec![3, 6]];
/// let merged: Vec<i32> = OrderedMerge::new(&sequences).copied().collect();
///
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
#[derive(Debug)]
pub struct OrderedMerge<'a, T> {
    sequences: Vec<&'a [T]>,
    frontier: BinaryHeap<Reverse<Cursor<'a, T>>>,
    emitted: usize,
    remaining: usize,
}

impl<'a, T> OrderedMerge<'a, T>
where
    T: Ord,
{
    /// Seeds the frontier with the first element of every non-empty sequence.
    #[must_use]
    pub fn new<S>(sequences: &'a [S]) -> Self
    where
        S: AsRef<[T]>,
    {
        let sequences: Vec<&'a [T]> = sequences.iter().map(|items| items.as_ref()).collect();

        let frontier: BinaryHeap<_> = sequences
            .iter()
            .copied()
            .enumerate()
            .filter_map(|(sequence, items)| {
                items.first().map(|value| {
                    Reverse(Cursor {
                        sequence,
                        position: 0,
                        value,
                    })
                })
            })
            .collect();

        let remaining: usize = sequences.iter().map(|items| items.len()).sum();

        debug!(
            "ordered_merge: {} sequences, {} live cursors, {} elements",
            sequences.len(),
            frontier.len(),
            remaining
        );

        Self {
            sequences,
            frontier,
            emitted: 0,
            remaining,
        }
    }

    /// Number of values yielded so far.
    #[must_use]
    pub const fn emitted(&self) -> usize {
        self.emitted
    }

    /// Number of sequences that still have unconsumed elements.
    #[must_use]
    pub fn live_cursors(&self) -> usize {
        self.frontier.len()
    }

    /// Smallest value not yet yielded, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a T> {
        self.frontier.peek().map(|Reverse(cursor)| cursor.value)
    }
}

impl<'a, T> Iterator for OrderedMerge<'a, T>
where
    T: Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let Reverse(cursor) = self.frontier.pop()?;
        self.emitted += 1;
        self.remaining -= 1;

        let position = cursor.position + 1;
        if let Some(next) = self.sequences[cursor.sequence].get(position) {
            if next < cursor.value {
                warn!(
                    "ordered_merge: sequence {} is not sorted at position {}",
                    cursor.sequence,
                    position
                );
            }
            self.frontier.push(Reverse(Cursor {
                sequence: cursor.sequence,
                position,
                value: next,
            }));
        }

        Some(cursor.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Ord> ExactSizeIterator for OrderedMerge<'_, T> {}

impl<T: Ord> FusedIterator for OrderedMerge<'_, T> {}

/// Extension trait for merging a slice of sorted sequences in order.
pub trait OrderedMergeExt<T> {
    /// Lazily merges the sequences, yielding references in non-decreasing order.
    fn ordered_merge(&self) -> OrderedMerge<'_, T>;
}

impl<T, S> OrderedMergeExt<T> for [S]
where
    S: AsRef<[T]>,
    T: Ord,
{
    fn ordered_merge(&self) -> OrderedMerge<'_, T> {
        OrderedMerge::new(self)
    }
}
