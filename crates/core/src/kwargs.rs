// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword arguments and scoped inheritance.

use indexmap::IndexMap;

/// Separator between values of a multi-value keyword argument.
pub const LIST_SEPARATOR: char = ',';

/// Keyword arguments in declaration order.
///
/// Re-declaring a key replaces its value but keeps its original position.
pub type Kwargs = IndexMap<String, String>;

/// Merge a node's own keyword arguments over its parent's effective set.
///
/// Always returns a fresh map: keys from both sides, `own` winning on
/// collision. Neither input is modified.
pub fn merge(parent: &Kwargs, own: &Kwargs) -> Kwargs {
    let mut merged = Kwargs::with_capacity(parent.len() + own.len());
    for (key, value) in parent.iter().chain(own) {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Split a multi-value keyword argument into its values.
///
/// `"5/I/60,5/V/70"` yields `["5/I/60", "5/V/70"]`.
pub fn split_values(value: &str) -> impl Iterator<Item = &str> {
    value.split(LIST_SEPARATOR)
}

/// Join values of a multi-value keyword argument.
pub fn join_values<S: AsRef<str>>(values: &[S]) -> String {
    let mut joined = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            joined.push(LIST_SEPARATOR);
        }
        joined.push_str(value.as_ref());
    }
    joined
}

#[cfg(test)]
#[path = "kwargs_tests.rs"]
mod tests;
