// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tree builder options.

use obsplan_grammar::DEFAULT_MAX_NESTING_DEPTH;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the builder does when a command cannot be expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArityPolicy {
    /// Fail the whole build.
    #[default]
    Abort,
    /// Keep the command with no actions and record the error on it.
    Skip,
}

impl fmt::Display for ArityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityPolicy::Abort => write!(f, "abort"),
            ArityPolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for ArityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(ArityPolicy::Abort),
            "skip" => Ok(ArityPolicy::Skip),
            other => Err(format!("unknown arity policy '{}', expected abort or skip", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub arity_policy: ArityPolicy,
    /// Deepest sequence nesting the builder accepts (0 = no cap).
    pub max_nesting_depth: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            arity_policy: ArityPolicy::default(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl BuildConfig {
    pub fn with_arity_policy(mut self, policy: ArityPolicy) -> Self {
        self.arity_policy = policy;
        self
    }

    pub fn with_max_nesting_depth(mut self, max: usize) -> Self {
        self.max_nesting_depth = max;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
