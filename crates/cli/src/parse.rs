// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing duration arguments like `"1h30m"`, `"987654s"` or `"-5s"`.

use exfmt_core::{TimeUnit, SECOND};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("empty duration string")]
    Empty,

    #[error("invalid number in duration: {0}")]
    InvalidNumber(String),

    #[error("unknown duration suffix '{suffix}' in: {input}")]
    UnknownSuffix { suffix: String, input: String },

    #[error("duration out of range: {0}")]
    Overflow(String),
}

/// Parse a duration string into signed nanoseconds.
///
/// The string is one or more `<number><suffix>` groups with an optional
/// leading `-`. A number without a suffix counts as seconds. Negative values
/// are returned as-is; rejecting them is the formatter's job.
pub fn parse_duration(input: &str) -> Result<i64, ParseDurationError> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    if body.is_empty() {
        return Err(ParseDurationError::Empty);
    }

    // Accumulate the magnitude wider than i64 so i64::MIN stays reachable.
    let mut total: i128 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return Err(ParseDurationError::InvalidNumber(trimmed.to_string()));
        }
        // Only digits here, so a parse failure means the value is too large.
        let value: i128 = rest[..digits_end]
            .parse()
            .map_err(|_| ParseDurationError::Overflow(trimmed.to_string()))?;
        rest = rest[digits_end..].trim_start();

        let suffix_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let suffix = &rest[..suffix_end];
        rest = rest[suffix_end..].trim_start();

        let scale = suffix_nanos(suffix).ok_or_else(|| ParseDurationError::UnknownSuffix {
            suffix: suffix.to_string(),
            input: trimmed.to_string(),
        })?;
        total = value
            .checked_mul(i128::from(scale))
            .and_then(|v| total.checked_add(v))
            .ok_or_else(|| ParseDurationError::Overflow(trimmed.to_string()))?;
    }

    let signed = if negative { -total } else { total };
    i64::try_from(signed).map_err(|_| ParseDurationError::Overflow(trimmed.to_string()))
}

fn suffix_nanos(suffix: &str) -> Option<i64> {
    match suffix.to_ascii_lowercase().as_str() {
        "ns" | "nanos" | "nanosecond" | "nanoseconds" => Some(1),
        "us" | "micros" | "microsecond" | "microseconds" => Some(1_000),
        "ms" | "millis" | "millisecond" | "milliseconds" => Some(1_000_000),
        "" => i64::try_from(SECOND.nanos()).ok(),
        other => other
            .parse::<TimeUnit>()
            .ok()
            .and_then(|unit| i64::try_from(unit.nanos()).ok()),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
