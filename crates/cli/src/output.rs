// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One formatted duration argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub input: String,
    pub nanos: i64,
    pub text: String,
}

/// One row of `exfmt units`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitRow {
    pub name: String,
    pub nanos: u64,
}

/// Text is one phrase per line; JSON is an array of records.
pub fn render_phrases(records: &[Rendered], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(records.iter().map(|r| format!("{}\n", r.text)).collect()),
        OutputFormat::Json => render_json(records),
    }
}

pub fn render_units(rows: &[UnitRow], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
            Ok(rows
                .iter()
                .map(|r| format!("{:<width$}  {}\n", r.name, r.nanos, width = width))
                .collect())
        }
        OutputFormat::Json => render_json(rows),
    }
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
