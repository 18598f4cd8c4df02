// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `exfmt format` and `exfmt as`: render duration arguments.

use anyhow::Result;
use exfmt_core::{format_duration_as, FormatError, Formatter, TimeUnit, UnitNames};

use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat, Rendered};
use crate::parse::parse_duration;

/// Exit code for a negative duration.
pub const EXIT_NEGATIVE: i32 = 2;

#[derive(clap::Args)]
pub struct FormatArgs {
    /// Durations to format (e.g. 90s, 1h30m, 2w3d); pass negative values after `--`
    #[arg(required = true, value_name = "DURATION")]
    pub durations: Vec<String>,
}

#[derive(clap::Args)]
pub struct AsArgs {
    /// Unit to express the durations in (week, day, hour, minute, second)
    pub unit: TimeUnit,

    /// Durations to format (e.g. 90d, 36h); pass negative values after `--`
    #[arg(required = true, value_name = "DURATION")]
    pub durations: Vec<String>,
}

pub fn handle_format(args: FormatArgs, names: UnitNames, format: OutputFormat) -> Result<()> {
    let formatter = Formatter::default().with_names(names);
    let records = render_all(&args.durations, |nanos| formatter.format(nanos))?;
    print!("{}", output::render_phrases(&records, format)?);
    Ok(())
}

pub fn handle_as(args: AsArgs, names: UnitNames, format: OutputFormat) -> Result<()> {
    let names = (!names.is_empty()).then_some(&names);
    let records = render_all(&args.durations, |nanos| {
        format_duration_as(nanos, names, args.unit)
    })?;
    print!("{}", output::render_phrases(&records, format)?);
    Ok(())
}

/// Parse and render every argument, stopping at the first failure so nothing
/// is printed for a bad batch.
fn render_all(
    inputs: &[String],
    render: impl Fn(i64) -> Result<String, FormatError>,
) -> Result<Vec<Rendered>> {
    inputs
        .iter()
        .map(|input| -> Result<Rendered> {
            let nanos = parse_duration(input)?;
            tracing::debug!(input = %input, nanos, "parsed duration");
            let text = render(nanos).map_err(|e| {
                if matches!(e, FormatError::Negative { .. }) {
                    anyhow::Error::new(ExitError::new(EXIT_NEGATIVE, e.to_string()))
                } else {
                    anyhow::Error::new(e)
                }
            })?;
            Ok(Rendered {
                input: input.clone(),
                nanos,
                text,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
