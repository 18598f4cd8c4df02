// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! exfmt-core: human-readable duration formatting
//!
//! Turns nanosecond spans into phrases like `"1 week, 4 days and 10 hours"`
//! or a single coarse unit like `"2160 hours"`.

pub mod error;
pub mod join;
pub mod time_fmt;
pub mod unit;

pub use error::FormatError;
pub use join::join_fragments;
pub use time_fmt::{
    format_duration, format_duration_as, humanize, humanize_as, Formatter, Fragment, NOW,
};
pub use unit::{
    plural_name, pluralize, TimeUnit, UnitNames, UnitTable, DAY, DEFAULT_UNITS, HOUR, MINUTE,
    SECOND, WEEK,
};
