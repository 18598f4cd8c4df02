// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors returned by the formatters and unit table construction.

use thiserror::Error;

/// Errors from duration formatting.
///
/// The formatters themselves only ever return [`FormatError::Negative`].
/// A negative duration is a caller bug rather than an expected runtime
/// condition; it is reported instead of being rendered. The remaining
/// variants come from building a custom [`UnitTable`](crate::UnitTable)
/// or parsing a unit name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The duration passed to a formatter was below zero.
    #[error("negative duration: {nanos}ns")]
    Negative {
        /// The offending value in nanoseconds.
        nanos: i64,
    },

    #[error("unit table is empty")]
    EmptyUnitTable,

    #[error("unit '{name}' has a zero magnitude")]
    ZeroMagnitude { name: &'static str },

    /// Units must be listed largest first with no repeated magnitude.
    #[error("unit table must be strictly descending: '{smaller}' may not follow '{larger}'")]
    UnitsNotDescending {
        larger: &'static str,
        smaller: &'static str,
    },

    #[error("unknown time unit: {0}")]
    UnknownUnit(String),
}
