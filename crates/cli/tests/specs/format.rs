//! `exfmt format` specs
//!
//! Verify the cascading phrase for common durations.

use crate::prelude::*;

#[test]
fn zero_is_now() {
    cli().args(&["format", "0"]).passes().stdout_eq("now\n");
}

#[test]
fn sub_second_is_now() {
    cli()
        .args(&["format", "999999999ns", "1000000000ns"])
        .passes()
        .stdout_eq("now\n1 second\n");
}

#[test]
fn seconds_and_minutes_boundary() {
    cli()
        .args(&["format", "59s", "60s"])
        .passes()
        .stdout_eq("59 seconds\n1 minute\n");
}

#[test]
fn every_unit() {
    cli()
        .args(&["format", "987654s"])
        .passes()
        .stdout_eq("1 week, 4 days, 10 hours, 20 minutes and 54 seconds\n");
}

#[test]
fn compound_input() {
    cli()
        .args(&["format", "8d", "2h1m", "1h1m1s"])
        .passes()
        .stdout_eq("1 week and 1 day\n2 hours and 1 minute\n1 hour, 1 minute and 1 second\n");
}

#[test]
fn json_output() {
    cli()
        .args(&["-o", "json", "format", "61s"])
        .passes()
        .stdout_eq(
            r#"[
  {
    "input": "61s",
    "nanos": 61000000000,
    "text": "1 minute and 1 second"
  }
]
"#,
        );
}

#[test]
fn output_flag_after_durations() {
    cli()
        .args(&["format", "1s", "-o", "json"])
        .passes()
        .stdout_eq(
            r#"[
  {
    "input": "1s",
    "nanos": 1000000000,
    "text": "1 second"
  }
]
"#,
        );
}
