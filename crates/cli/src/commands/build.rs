// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `obsplan build <file>` - Build the runtime tree of a night plan

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use obsplan_plan::ArityPolicy;

use crate::config::Config;
use crate::output::{format_night, print_json, OutputFormat};

#[derive(Args)]
pub struct BuildArgs {
    /// Plan file to build
    #[arg(required_unless_present = "ir")]
    pub file: Option<PathBuf>,

    /// Build from a JSON plan IR file instead of plan text
    #[arg(long = "ir", value_name = "FILE", conflicts_with = "file")]
    pub ir: Option<PathBuf>,

    /// Night ID (defaults to the configured night)
    #[arg(long = "night")]
    pub night: Option<String>,

    /// What to do with commands that cannot be expanded (abort, skip)
    #[arg(long = "arity")]
    pub arity: Option<ArityPolicy>,
}

pub fn handle(args: BuildArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let night = args.night.as_deref().unwrap_or(&config.night);
    let (path, is_ir) = match (&args.file, &args.ir) {
        (_, Some(ir)) => (ir, true),
        (Some(file), None) => (file, false),
        (None, None) => return Err(anyhow!("a plan file or --ir is required")),
    };

    let plan = super::load_plan(path, is_ir, night, config, args.arity)?;
    let night_plan = plan
        .get_nightplan(night)
        .ok_or_else(|| anyhow!("night plan not found: {}", night))?;

    match format {
        OutputFormat::Text => print!("{}", format_night(night_plan)?),
        OutputFormat::Json => print_json(night_plan)?,
    }
    Ok(())
}
