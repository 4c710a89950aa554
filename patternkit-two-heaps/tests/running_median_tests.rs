// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use patternkit_test_utils::{fixtures, oracle, random::random_values};
use patternkit_two_heaps::{Median, RunningMedian};

#[test]
fn test_running_median_number_stream() {
    // Arrange
    let mut stream = RunningMedian::new();

    for (value, expected) in fixtures::number_stream() {
        // Act
        stream.insert(value);

        // Assert
        let median = stream.median().map(|m| m.cloned().value());
        assert_eq!(median, Some(expected), "after inserting {value}");
    }
}

#[test]
fn test_running_median_empty_has_no_median() {
    let stream: RunningMedian<i32> = RunningMedian::default();

    assert!(stream.is_empty());
    assert_eq!(stream.len(), 0);
    assert_eq!(stream.median(), None);
}

#[test]
fn test_running_median_single_and_pair_shapes() {
    // Arrange
    let mut stream = RunningMedian::new();

    // Act & Assert
    stream.insert(10);
    assert_eq!(stream.median(), Some(Median::Single(&10)));

    stream.insert(20);
    assert_eq!(stream.median(), Some(Median::Pair(&10, &20)));

    stream.insert(15);
    assert_eq!(stream.median(), Some(Median::Single(&15)));
    assert_eq!(stream.len(), 3);
}

#[test]
fn test_running_median_duplicates() {
    let stream: RunningMedian<i32> = [5, 5, 5, 5].into_iter().collect();

    assert_eq!(stream.median(), Some(Median::Pair(&5, &5)));
}

#[test]
fn test_running_median_descending_input_stays_balanced() {
    let stream: RunningMedian<i32> = (1..=9).rev().collect();

    assert_eq!(stream.median(), Some(Median::Single(&5)));
    assert_eq!(stream.len(), 9);
}

#[test]
fn test_running_median_matches_sorted_oracle() {
    for seed in 0..30 {
        // Arrange
        let values = random_values(seed, 60, -1_000..1_000);
        let mut stream = RunningMedian::new();

        for (index, &value) in values.iter().enumerate() {
            // Act
            stream.insert(value);

            // Assert
            assert_eq!(
                stream.median().map(|m| m.cloned().value()),
                oracle::median_of(&values[..=index]),
                "seed {seed}, step {index}"
            );
        }
    }
}

#[test]
fn test_running_median_extend_and_clear() {
    // Arrange
    let mut stream = RunningMedian::new();

    // Act
    stream.extend(vec![7, 1, 3]);

    // Assert
    assert_eq!(stream.median(), Some(Median::Single(&3)));

    stream.clear();
    assert!(stream.is_empty());
    assert_eq!(stream.median(), None);
}

#[test]
fn test_running_median_works_for_non_numeric_values() {
    let stream: RunningMedian<&str> = ["pear", "apple", "fig", "kiwi"].into_iter().collect();

    assert_eq!(stream.median(), Some(Median::Pair(&"fig", &"kiwi")));
}
