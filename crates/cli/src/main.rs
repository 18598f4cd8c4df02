// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! exfmt - human-readable durations from the command line

mod commands;
mod config;
mod env;
mod exit_error;
mod output;
mod parse;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{format, units};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "exfmt", version, about = "Format durations as readable English")]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// TOML file with unit name overrides (default: $EXFMT_NAMES)
    #[arg(long, value_name = "FILE", global = true)]
    names: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Break durations down into weeks, days, hours, minutes and seconds
    Format(format::FormatArgs),
    /// Express durations as a whole number of one unit
    As(format::AsArgs),
    /// List the unit table
    Units,
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr so stdout stays parseable; filter from `EXFMT_LOG`.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*};

    let (filter, rejected) = log_filter(crate::env::log_filter());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    if let Some(directive) = rejected {
        tracing::warn!(directive = %directive, "invalid EXFMT_LOG filter, using 'warn'");
    }
}

/// The filter for `directive`, falling back to `warn`. A directive that does
/// not parse is handed back so it can be reported.
fn log_filter(
    directive: Option<String>,
) -> (tracing_subscriber::EnvFilter, Option<String>) {
    use tracing_subscriber::EnvFilter;

    match directive {
        Some(directive) => match EnvFilter::try_new(&directive) {
            Ok(filter) => (filter, None),
            Err(_) => (EnvFilter::new("warn"), Some(directive)),
        },
        None => (EnvFilter::new("warn"), None),
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise we render the full chain so context isn't
/// lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let names = config::resolve_names(cli.names.as_deref())?;

    match command {
        Commands::Format(args) => format::handle_format(args, names, format),
        Commands::As(args) => format::handle_as(args, names, format),
        Commands::Units => units::handle(names, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
