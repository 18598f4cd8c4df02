// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Joining rendered fragments into a phrase.

/// Join fragments as an English list: `"a"`, `"a and b"`, `"a, b and c"`.
///
/// There is no serial comma; the single "and" always sits before the last
/// item. An empty slice yields an empty string.
pub fn join_fragments(fragments: &[String]) -> String {
    match fragments {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
#[path = "join_tests.rs"]
mod tests;
