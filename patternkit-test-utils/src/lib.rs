// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the patternkit workspace.
//!
//! This crate is meant for `dev-dependencies` only.
//!
//! - [`fixtures`] holds the worked scenarios every algorithm crate is checked against.
//! - [`oracle`] holds slow, obviously correct reference implementations.
//! - [`random`] produces reproducible random inputs from a seed.
//! - [`Tagged`] is a value that compares by key only, so tie-breaking can be observed.
//!
//! ```rust
//! use patternkit_test_utils::{fixtures, oracle};
//!
//! let sequences = fixtures::three_sequences();
//! assert_eq!(oracle::sorted_concat(&sequences)[4], 4);
//! ```
pub mod fixtures;
pub mod oracle;
pub mod random;
pub mod tagged;

pub use tagged::Tagged;
