// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `obsplan parse <file>` - Check plan syntax and print its structure

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::Config;
use crate::output::{format_plan, print_json, OutputFormat};

#[derive(Args)]
pub struct ParseArgs {
    /// Plan file to parse
    pub file: PathBuf,
}

pub fn handle(args: ParseArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let text = super::read_file(&args.file)?;
    let ir = super::parse_text(&args.file, &text, config)?;
    tracing::debug!(
        file = %args.file.display(),
        sequences = ir.count_sequences(),
        commands = ir.count_commands(),
        "parsed plan"
    );

    match format {
        OutputFormat::Text => print!("{}", format_plan(&ir)?),
        OutputFormat::Json => print_json(&ir)?,
    }
    Ok(())
}
