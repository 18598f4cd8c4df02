// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

// --- Logging ---

/// Log filter directive, e.g. `debug` or `exfmt=trace`.
pub fn log_filter() -> Option<String> {
    std::env::var("EXFMT_LOG").ok().filter(|s| !s.is_empty())
}

// --- Unit names ---

/// Names file used when `--names` is not given.
pub fn names_path() -> Option<PathBuf> {
    std::env::var_os("EXFMT_NAMES")
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
