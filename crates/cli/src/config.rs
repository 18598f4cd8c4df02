// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit name overrides loaded from a TOML file.
//!
//! ```toml
//! [names]
//! day = "sol"
//! hour = "hr"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use exfmt_core::{TimeUnit, UnitNames};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read names file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid names file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("empty name for unit '{0}'")]
    EmptyName(String),

    #[error("unit '{unit}' is named twice: keys '{first}' and '{second}'")]
    DuplicateUnit {
        unit: &'static str,
        first: String,
        second: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct NamesFile {
    names: BTreeMap<String, String>,
}

/// Parse names file content. Keys that are not unit names are skipped; two
/// keys for the same unit (e.g. `day` and `days`) are an error.
pub fn parse_names(content: &str) -> Result<UnitNames, ConfigError> {
    let file: NamesFile = toml::from_str(content)?;
    let mut names = UnitNames::new();
    let mut keys: HashMap<&'static str, String> = HashMap::new();
    for (key, name) in file.names {
        let Ok(unit) = key.parse::<TimeUnit>() else {
            tracing::warn!(key = %key, "ignoring unknown unit in names file");
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyName(key));
        }
        if let Some(first) = keys.insert(unit.name(), key.clone()) {
            return Err(ConfigError::DuplicateUnit {
                unit: unit.name(),
                first,
                second: key,
            });
        }
        names.insert(unit, name);
    }
    Ok(names)
}

pub fn load_names(path: &Path) -> Result<UnitNames, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let names = parse_names(&content)?;
    tracing::debug!(path = %path.display(), overrides = names.len(), "loaded unit names");
    Ok(names)
}

/// Names from `explicit`, else from `EXFMT_NAMES`, else none.
pub fn resolve_names(explicit: Option<&Path>) -> Result<UnitNames, ConfigError> {
    match explicit
        .map(Path::to_path_buf)
        .or_else(crate::env::names_path)
    {
        Some(path) => load_names(&path),
        None => Ok(UnitNames::new()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
