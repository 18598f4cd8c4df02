//! Unit name override specs
//!
//! Verify `--names` and `EXFMT_NAMES`.

use crate::prelude::*;

#[test]
fn names_flag_applies_to_format() {
    let names = NamesFile::new("[names]\nday = \"sol\"\n");
    cli()
        .args(&["--names", &names.path_str(), "format", "2d1h"])
        .passes()
        .stdout_eq("2 sols and 1 hour\n");
}

#[test]
fn names_flag_applies_to_single_unit() {
    let names = NamesFile::new("[names]\nday = \"sol\"\n");
    cli()
        .args(&["--names", &names.path_str(), "as", "day", "1d", "90d"])
        .passes()
        .stdout_eq("1 sol\n90 sols\n");
}

#[test]
fn names_env_var() {
    let names = NamesFile::new("[names]\nsecond = \"tick\"\n");
    cli()
        .env("EXFMT_NAMES", names.path())
        .args(&["format", "2s"])
        .passes()
        .stdout_eq("2 ticks\n");
}

#[test]
fn flag_overrides_env_var() {
    let from_env = NamesFile::new("[names]\nsecond = \"tick\"\n");
    let from_flag = NamesFile::new("[names]\nsecond = \"sec\"\n");
    cli()
        .env("EXFMT_NAMES", from_env.path())
        .args(&["--names", &from_flag.path_str(), "format", "2s"])
        .passes()
        .stdout_eq("2 secs\n");
}

#[test]
fn unknown_key_warns() {
    let names = NamesFile::new("[names]\nfortnight = \"fn\"\n");
    cli()
        .args(&["--names", &names.path_str(), "format", "1s"])
        .passes()
        .stdout_eq("1 second\n")
        .stderr_has("ignoring unknown unit in names file");
}

#[test]
fn missing_names_file_fails() {
    cli()
        .args(&["--names", "/nonexistent/exfmt-names.toml", "format", "1s"])
        .fails_with(1)
        .stderr_has("failed to read names file /nonexistent/exfmt-names.toml");
}

#[test]
fn names_flag_after_durations() {
    let names = NamesFile::new("[names]\nday = \"sol\"\n");
    cli()
        .args(&["as", "day", "90d", "--names", &names.path_str()])
        .passes()
        .stdout_eq("90 sols\n");
}

#[test]
fn duplicate_unit_keys_fail() {
    let names = NamesFile::new("[names]\nday = \"sol\"\ndays = \"jour\"\n");
    cli()
        .args(&["--names", &names.path_str(), "format", "2d"])
        .fails_with(1)
        .stdout_eq("")
        .stderr_eq("Error: unit 'day' is named twice: keys 'day' and 'days'\n");
}
