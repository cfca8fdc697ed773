// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `obsplan.toml` configuration.
//!
//! ```toml
//! client_name = "DefaultClient"
//! plan_id = "observation_plan"
//! night = "night"
//!
//! [grammar]
//! max_nesting_depth = 256
//! wrap_bare = true
//!
//! [build]
//! arity_policy = "abort"
//! max_nesting_depth = 256
//! ```

use anyhow::{Context, Result};
use obsplan_grammar::GrammarConfig;
use obsplan_plan::BuildConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "obsplan.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub client_name: String,
    pub plan_id: String,
    /// Night ID used when a command is not given `--night`.
    pub night: String,
    pub grammar: GrammarConfig,
    pub build: BuildConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_name: "DefaultClient".to_string(),
            plan_id: "observation_plan".to_string(),
            night: "night".to_string(),
            grammar: GrammarConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl Config {
    /// Load `explicit`, or `./obsplan.toml` if it exists, or the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
