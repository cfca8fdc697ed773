// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `obsplan run <file>` - Dry-run the actions of a night plan

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use obsplan_core::Action;
use obsplan_plan::{ActionExecutor, ArityPolicy, ExecError, LoggingExecutor};

use crate::config::Config;
use crate::output::{format_actions, print_json, OutputFormat};

#[derive(Args)]
pub struct RunArgs {
    /// Plan file to run
    pub file: PathBuf,

    /// Night ID (defaults to the configured night)
    #[arg(long = "night")]
    pub night: Option<String>,

    /// What to do with commands that cannot be expanded (abort, skip)
    #[arg(long = "arity")]
    pub arity: Option<ArityPolicy>,
}

/// Logs every action and keeps a copy for printing.
#[derive(Debug, Default)]
pub(crate) struct DryRun {
    pub(crate) actions: Vec<Action>,
}

impl ActionExecutor for DryRun {
    fn execute(&mut self, action: &Action) -> Result<(), ExecError> {
        LoggingExecutor.execute(action)?;
        self.actions.push(action.clone());
        Ok(())
    }
}

pub fn handle(args: RunArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let night = args.night.as_deref().unwrap_or(&config.night);
    let plan = super::load_plan(&args.file, false, night, config, args.arity)?;

    let mut dry_run = DryRun::default();
    plan.run_night_with(night, &mut dry_run)?;

    match format {
        OutputFormat::Text => print!("{}", format_actions(&dry_run.actions)),
        OutputFormat::Json => print_json(&dry_run.actions)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
