// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `exfmt units`: list the unit table.

use anyhow::Result;
use exfmt_core::{Formatter, UnitNames};

use crate::output::{self, OutputFormat, UnitRow};

pub fn handle(names: UnitNames, format: OutputFormat) -> Result<()> {
    let formatter = Formatter::default().with_names(names);
    print!("{}", output::render_units(&rows(&formatter), format)?);
    Ok(())
}

/// The formatter's table, largest unit first, under its resolved names.
fn rows(formatter: &Formatter) -> Vec<UnitRow> {
    formatter
        .table()
        .units()
        .iter()
        .map(|unit| UnitRow {
            name: formatter.names().resolve(unit).to_string(),
            nanos: unit.nanos(),
        })
        .collect()
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
