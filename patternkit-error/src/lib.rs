// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the patternkit algorithm crates
//!
//! Every fallible operation in the workspace reports one of the variants of
//! [`PatternError`]. The computations are purely functional over in-memory
//! input, so no error is ever recoverable by retrying.
//!
//! # Examples
//!
//! ```
//! use patternkit_error::{PatternError, Result};
//!
//! fn pick(k: usize) -> Result<usize> {
//!     if k == 0 {
//!         return Err(PatternError::invalid_argument("k must be at least 1"));
//!     }
//!     Ok(k)
//! }
//!
//! assert!(pick(0).is_err());
//! ```

/// Root error type for all patternkit operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// A precondition on an argument was violated
    ///
    /// Raised for example when a 1-indexed rank of zero is requested.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the violated precondition
        message: String,
    },

    /// The requested rank exceeds the number of available elements
    #[error("Requested element {requested} but only {available} available")]
    OutOfRange {
        /// The 1-indexed rank that was asked for
        requested: usize,
        /// How many elements the input actually holds
        available: usize,
    },
}

impl PatternError {
    /// Create an invalid argument error with the given message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an out of range error
    #[must_use]
    pub const fn out_of_range(requested: usize, available: usize) -> Self {
        Self::OutOfRange {
            requested,
            available,
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Inputs are static, so retrying the same call always fails the same way.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        false
    }

    /// Check if this error indicates a permanent failure
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::OutOfRange { .. })
    }
}

/// Specialized Result type for patternkit operations
///
/// # Examples
///
/// ```
/// use patternkit_error::Result;
///
/// fn answer() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, PatternError>;
