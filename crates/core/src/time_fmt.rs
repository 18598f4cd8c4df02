// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable duration formatting.
//!
//! Two shapes are supported:
//!
//! - cascading, e.g. `"2 hours, 2 minutes and 2 seconds"`, via
//!   [`format_duration`] or a configured [`Formatter`];
//! - single unit, e.g. `"2160 hours"`, via [`format_duration_as`].
//!
//! Durations are nanosecond counts. Negative counts are rejected with
//! [`FormatError::Negative`].

use std::fmt;
use std::time::Duration;

use crate::error::FormatError;
use crate::join::join_fragments;
use crate::unit::{plural_name, pluralize, TimeUnit, UnitNames, UnitTable};

/// Rendered for any duration shorter than the smallest unit of the table.
pub const NOW: &str = "now";

/// Format `nanos` as a cascading phrase over weeks, days, hours, minutes and
/// seconds.
///
/// Sub-second remainders are dropped, and anything under one second is
/// `"now"`. Units with a zero count are omitted.
///
/// ```
/// use exfmt_core::format_duration;
///
/// assert_eq!(format_duration(0).unwrap(), "now");
/// assert_eq!(
///     format_duration(987_654 * 1_000_000_000).unwrap(),
///     "1 week, 4 days, 10 hours, 20 minutes and 54 seconds"
/// );
/// assert!(format_duration(-1).is_err());
/// ```
pub fn format_duration(nanos: i64) -> Result<String, FormatError> {
    Formatter::default().format(nanos)
}

/// Format `nanos` as a whole number of `unit`, discarding the remainder.
///
/// The name comes from `names` when it has an entry for `unit`, otherwise the
/// unit's built-in name is used. This never cascades into smaller units.
///
/// ```
/// use exfmt_core::{format_duration_as, DAY, HOUR, MINUTE};
///
/// let span = DAY.times(90) + MINUTE.times(59);
/// assert_eq!(format_duration_as(span, None, DAY).unwrap(), "90 days");
/// assert_eq!(format_duration_as(span, None, HOUR).unwrap(), "2160 hours");
/// ```
pub fn format_duration_as(
    nanos: i64,
    names: Option<&UnitNames>,
    unit: TimeUnit,
) -> Result<String, FormatError> {
    Ok(render_as(non_negative(nanos)?, names, unit))
}

/// [`format_duration`] for a `std::time::Duration`, which is never negative.
pub fn humanize(duration: Duration) -> String {
    Formatter::default().humanize(duration)
}

/// [`format_duration_as`] for a `std::time::Duration`.
pub fn humanize_as(duration: Duration, names: Option<&UnitNames>, unit: TimeUnit) -> String {
    render_as(duration.as_nanos(), names, unit)
}

fn non_negative(nanos: i64) -> Result<u128, FormatError> {
    u128::try_from(nanos).map_err(|_| FormatError::Negative { nanos })
}

fn render_as(nanos: u128, names: Option<&UnitNames>, unit: TimeUnit) -> String {
    let count = nanos / u128::from(unit.nanos());
    let name = names.map_or(unit.name(), |names| names.resolve(&unit));
    pluralize(count, name)
}

/// One `"<count> <name>"` piece of a cascading phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub count: u128,
    pub unit: TimeUnit,
    /// Name after overrides and pluralization.
    pub name: String,
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.name)
    }
}

/// A cascading formatter over a unit table, with optional name overrides.
///
/// ```
/// use exfmt_core::{Formatter, UnitNames, UnitTable, DAY, HOUR};
///
/// let table = UnitTable::new(vec![DAY, HOUR]).unwrap();
/// let formatter = Formatter::new(table).with_names(UnitNames::new().with(DAY, "sol"));
/// assert_eq!(formatter.format(HOUR.times(50)).unwrap(), "2 sols and 2 hours");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    table: UnitTable,
    names: UnitNames,
}

impl Formatter {
    pub fn new(table: UnitTable) -> Self {
        Self {
            table,
            names: UnitNames::new(),
        }
    }

    pub fn with_names(mut self, names: UnitNames) -> Self {
        self.names = names;
        self
    }

    pub fn table(&self) -> &UnitTable {
        &self.table
    }

    pub fn names(&self) -> &UnitNames {
        &self.names
    }

    /// Cascading phrase for `nanos`, or `"now"` when it is shorter than the
    /// smallest unit of the table.
    pub fn format(&self, nanos: i64) -> Result<String, FormatError> {
        Ok(self.render(non_negative(nanos)?))
    }

    /// Single-unit phrase for `nanos` using this formatter's names.
    pub fn format_as(&self, nanos: i64, unit: TimeUnit) -> Result<String, FormatError> {
        Ok(render_as(non_negative(nanos)?, Some(&self.names), unit))
    }

    pub fn humanize(&self, duration: Duration) -> String {
        self.render(duration.as_nanos())
    }

    /// The non-zero units `nanos` decomposes into, largest first.
    ///
    /// Empty when `nanos` is shorter than the smallest unit.
    pub fn breakdown(&self, nanos: i64) -> Result<Vec<Fragment>, FormatError> {
        Ok(self.fragments(non_negative(nanos)?))
    }

    fn fragments(&self, nanos: u128) -> Vec<Fragment> {
        let mut remaining = nanos;
        let mut fragments = Vec::new();
        for unit in self.table.units() {
            let magnitude = u128::from(unit.nanos());
            let count = remaining / magnitude;
            if count == 0 {
                continue;
            }
            remaining -= count * magnitude;
            fragments.push(Fragment {
                count,
                unit: *unit,
                name: plural_name(count, self.names.resolve(unit)),
            });
        }
        fragments
    }

    fn render(&self, nanos: u128) -> String {
        if nanos < u128::from(self.table.smallest().nanos()) {
            return NOW.to_string();
        }
        let rendered: Vec<String> = self
            .fragments(nanos)
            .iter()
            .map(Fragment::to_string)
            .collect();
        join_fragments(&rendered)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
