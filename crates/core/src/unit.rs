// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time units, unit tables and custom unit names.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FormatError;

/// A named unit of time with a fixed magnitude in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeUnit {
    nanos: u64,
    name: &'static str,
}

pub const SECOND: TimeUnit = TimeUnit::new(1_000_000_000, "second");
pub const MINUTE: TimeUnit = TimeUnit::new(60 * SECOND.nanos, "minute");
pub const HOUR: TimeUnit = TimeUnit::new(60 * MINUTE.nanos, "hour");
pub const DAY: TimeUnit = TimeUnit::new(24 * HOUR.nanos, "day");
pub const WEEK: TimeUnit = TimeUnit::new(7 * DAY.nanos, "week");

/// The built-in table, largest unit first.
pub const DEFAULT_UNITS: [TimeUnit; 5] = [WEEK, DAY, HOUR, MINUTE, SECOND];

impl TimeUnit {
    pub const fn new(nanos: u64, name: &'static str) -> Self {
        Self { nanos, name }
    }

    /// Magnitude in nanoseconds.
    pub const fn nanos(&self) -> u64 {
        self.nanos
    }

    /// Singular, built-in name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// `n` of this unit in nanoseconds, saturating at the `i64` bounds.
    ///
    /// ```
    /// use exfmt_core::{DAY, HOUR};
    ///
    /// assert_eq!(DAY.times(2), 48 * HOUR.times(1));
    /// ```
    pub const fn times(&self, n: i64) -> i64 {
        if self.nanos > i64::MAX as u64 {
            return if n >= 0 { i64::MAX } else { i64::MIN };
        }
        (self.nanos as i64).saturating_mul(n)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Accepts the long singular and plural names plus the usual abbreviations,
/// case-insensitively.
impl FromStr for TimeUnit {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "wk" | "wks" | "week" | "weeks" => Ok(WEEK),
            "d" | "day" | "days" => Ok(DAY),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(HOUR),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(MINUTE),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(SECOND),
            _ => Err(FormatError::UnknownUnit(s.to_string())),
        }
    }
}

/// An ordered list of units, strictly descending in magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTable {
    units: Vec<TimeUnit>,
}

impl UnitTable {
    /// Build a custom table.
    ///
    /// The table must be non-empty, contain no zero magnitudes and list its
    /// units largest first without repeating a magnitude.
    pub fn new(units: impl Into<Vec<TimeUnit>>) -> Result<Self, FormatError> {
        let units = units.into();
        if units.is_empty() {
            return Err(FormatError::EmptyUnitTable);
        }
        if let Some(unit) = units.iter().find(|u| u.nanos == 0) {
            return Err(FormatError::ZeroMagnitude { name: unit.name });
        }
        if let Some(pair) = units.windows(2).find(|w| w[0].nanos <= w[1].nanos) {
            return Err(FormatError::UnitsNotDescending {
                larger: pair[0].name,
                smaller: pair[1].name,
            });
        }
        Ok(Self { units })
    }

    pub fn units(&self) -> &[TimeUnit] {
        &self.units
    }

    /// The finest unit in the table. Anything shorter renders as "now".
    pub fn smallest(&self) -> TimeUnit {
        self.units.last().copied().unwrap_or(SECOND)
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self {
            units: DEFAULT_UNITS.to_vec(),
        }
    }
}

/// Overrides for unit names, keyed by unit magnitude.
///
/// Names are singular; the formatter pluralizes them. A unit without an
/// override keeps its built-in name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitNames {
    names: HashMap<u64, String>,
}

impl UnitNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`UnitNames::insert`].
    pub fn with(mut self, unit: TimeUnit, name: impl Into<String>) -> Self {
        self.insert(unit, name);
        self
    }

    /// Set the name for `unit`, returning the previous override if any.
    pub fn insert(&mut self, unit: TimeUnit, name: impl Into<String>) -> Option<String> {
        self.names.insert(unit.nanos, name.into())
    }

    pub fn get(&self, unit: &TimeUnit) -> Option<&str> {
        self.names.get(&unit.nanos).map(String::as_str)
    }

    /// The override for `unit`, falling back to its built-in name.
    pub fn resolve<'a>(&'a self, unit: &TimeUnit) -> &'a str {
        self.get(unit).unwrap_or(unit.name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(TimeUnit, S)> for UnitNames {
    fn from_iter<I: IntoIterator<Item = (TimeUnit, S)>>(iter: I) -> Self {
        let mut names = Self::new();
        for (unit, name) in iter {
            names.insert(unit, name);
        }
        names
    }
}

/// The name to show next to `count`: `name` itself for one, `name` + "s"
/// otherwise.
pub fn plural_name(count: u128, name: &str) -> String {
    if count == 1 {
        name.to_string()
    } else {
        format!("{}s", name)
    }
}

/// Render `"<count> <name>"` with the name pluralized for `count`.
pub fn pluralize(count: u128, name: &str) -> String {
    format!("{} {}", count, plural_name(count, name))
}

#[cfg(test)]
#[path = "unit_tests.rs"]
mod tests;
