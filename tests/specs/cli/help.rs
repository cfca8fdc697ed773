//! CLI help output specs

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("parse")
        .stdout_has("build")
        .stdout_has("run");
}

#[test]
fn build_help_shows_flags() {
    cli()
        .args(&["build", "--help"])
        .passes()
        .stdout_has("--night")
        .stdout_has("--ir")
        .stdout_has("--arity");
}

#[test]
fn version_flag() {
    cli().args(&["--version"]).passes().stdout_has("obsplan ");
}
