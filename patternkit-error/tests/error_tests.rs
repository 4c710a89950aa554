// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use patternkit_error::{PatternError, Result};

#[test]
fn test_error_display() {
    let err = PatternError::invalid_argument("k must be at least 1");
    assert_eq!(err.to_string(), "Invalid argument: k must be at least 1");

    let err = PatternError::out_of_range(7, 4);
    assert_eq!(
        err.to_string(),
        "Requested element 7 but only 4 available"
    );
}

#[test]
fn test_error_constructors() {
    let err = PatternError::invalid_argument("bad");
    assert!(matches!(err, PatternError::InvalidArgument { .. }));

    let err = PatternError::out_of_range(1, 0);
    assert_eq!(
        err,
        PatternError::OutOfRange {
            requested: 1,
            available: 0
        }
    );
}

#[test]
fn test_errors_are_never_recoverable() {
    assert!(!PatternError::invalid_argument("k").is_recoverable());
    assert!(!PatternError::out_of_range(2, 1).is_recoverable());
}

#[test]
fn test_errors_are_permanent() {
    assert!(PatternError::invalid_argument("k").is_permanent());
    assert!(PatternError::out_of_range(2, 1).is_permanent());
}

#[test]
fn test_error_propagates_with_question_mark() {
    fn inner() -> Result<u8> {
        Err(PatternError::out_of_range(3, 2))
    }

    fn outer() -> Result<u8> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert_eq!(outer(), Err(PatternError::out_of_range(3, 2)));
}

#[test]
fn test_error_converts_into_anyhow() {
    let result: anyhow::Result<()> = Err(PatternError::invalid_argument("zero rank").into());

    let err = result.unwrap_err();
    assert!(err.to_string().contains("zero rank"));
    assert!(err.downcast_ref::<PatternError>().is_some());
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    assert_error(&PatternError::out_of_range(1, 0));
}
