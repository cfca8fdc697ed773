// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI subcommands

pub mod build;
pub mod parse;
pub mod run;

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use obsplan_grammar::{Parser, PlanIr};
use obsplan_plan::{ArityPolicy, BuildConfig, ObservationPlan, TreeBuilder};
use std::path::Path;

pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parse `text` read from `path`, pointing syntax errors at the file.
pub(crate) fn parse_text(path: &Path, text: &str, config: &Config) -> Result<PlanIr> {
    Parser::parse_with_config(text, &config.grammar)
        .map_err(|e| anyhow!("syntax error in {}:\n{}", path.display(), e.diagnostic(text)))
}

/// Config build options with a command-line arity override applied.
pub(crate) fn build_config(config: &Config, arity: Option<ArityPolicy>) -> BuildConfig {
    match arity {
        Some(policy) => config.build.with_arity_policy(policy),
        None => config.build,
    }
}

/// Load a plan file, or a JSON IR file when `is_ir` is set, and register it
/// under `night` in a fresh registry.
pub(crate) fn load_plan(
    path: &Path,
    is_ir: bool,
    night: &str,
    config: &Config,
    arity: Option<ArityPolicy>,
) -> Result<ObservationPlan> {
    let text = read_file(path)?;
    let ir: PlanIr = if is_ir {
        serde_json::from_str(&text)
            .with_context(|| format!("invalid plan IR in {}", path.display()))?
    } else {
        parse_text(path, &text, config)?
    };

    let mut plan = ObservationPlan::with_builder(
        config.client_name.clone(),
        config.plan_id.clone(),
        TreeBuilder::new(build_config(config, arity)),
    );
    plan.write_nightplan(night, &ir, false)?;
    Ok(plan)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
