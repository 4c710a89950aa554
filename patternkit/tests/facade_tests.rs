// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use patternkit::prelude::*;
use patternkit_test_utils::{fixtures, oracle, random::random_sorted_sequences};

#[test]
fn test_prelude_exposes_every_pattern() -> anyhow::Result<()> {
    // Arrange
    let sequences = fixtures::three_sequences();

    // Act & Assert
    assert_eq!(*kth_smallest(&sequences, 5)?, 4);
    assert_eq!(merge_sorted(&sequences).len(), 9);
    assert_eq!(median(&sequences)?, Median::Single(&4));

    let stream: RunningMedian<i32> = [3, 1, 5, 4].into_iter().collect();
    assert_eq!(stream.median(), Some(Median::Pair(&3, &4)));

    assert_eq!(find_pair(&[2, 5, 9, 11], 11, PairSearch::HashMap), Some((0, 2)));
    Ok(())
}

#[test]
fn test_merge_median_and_running_median_agree() -> anyhow::Result<()> {
    for seed in 0..20 {
        // Arrange
        let sequences = random_sorted_sequences(seed, 5, 8, -40..40);
        let flat = oracle::sorted_concat(&sequences);
        if flat.is_empty() {
            continue;
        }

        // Act
        let merged = median(&sequences)?.cloned();
        let streamed: RunningMedian<i32> = sequences.iter().flatten().copied().collect();

        // Assert
        assert_eq!(streamed.median().map(|m| m.cloned()), Some(merged), "seed {seed}");
    }
    Ok(())
}

#[test]
fn test_merged_output_supports_two_pointer_search() {
    // Arrange
    let sequences = fixtures::interleaved_sequences();
    let merged = sequences.ordered_merge().copied().collect::<Vec<i32>>();

    // Act
    let pair = pair_with_target_sum(&merged, 13);

    // Assert: merged is [1..=7], 6 + 7 = 13
    assert_eq!(pair, Some((5, 6)));
}

#[test]
fn test_errors_surface_through_facade() {
    let sequences = fixtures::empty_sequences();

    let err = kth_smallest(&sequences, 1).unwrap_err();

    assert!(matches!(err, PatternError::OutOfRange { .. }));
    assert!(err.is_permanent());
}
