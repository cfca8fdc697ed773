// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! obsplan - observation plan compiler CLI

mod commands;
mod config;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{build, parse, run};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "obsplan",
    version,
    about = "Compile observation plans into executor actions"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Config file (defaults to ./obsplan.toml when present)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a plan file and print its structure
    Parse(parse::ParseArgs),
    /// Build the runtime tree of a night plan
    Build(build::BuildArgs),
    /// Build a night plan and dry-run its actions
    Run(run::RunArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid duplicate output.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // stdout carries command output; logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    setup_logging();
    let config = Config::load(cli.config.as_deref())?;

    match command {
        Commands::Parse(args) => parse::handle(args, &config, format),
        Commands::Build(args) => build::handle(args, &config, format),
        Commands::Run(args) => run::handle(args, &config, format),
    }
}

#[cfg(test)]
fn cli_command() -> clap::Command {
    use clap::CommandFactory;
    Cli::command()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
