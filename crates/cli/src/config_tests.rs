// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use obsplan_plan::ArityPolicy;
use std::io::Write;

#[test]
fn empty_file_gives_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.client_name, "DefaultClient");
    assert_eq!(config.plan_id, "observation_plan");
    assert_eq!(config.night, "night");
}

#[test]
fn full_file() {
    let config = Config::parse(
        r#"
client_name = "Observatory"
plan_id = "summer"
night = "2026-07-01"

[grammar]
max_nesting_depth = 4
wrap_bare = false

[build]
arity_policy = "skip"
"#,
    )
    .unwrap();
    assert_eq!(config.client_name, "Observatory");
    assert_eq!(config.night, "2026-07-01");
    assert_eq!(config.grammar.max_nesting_depth, 4);
    assert!(!config.grammar.wrap_bare);
    assert_eq!(config.build.arity_policy, ArityPolicy::Skip);
}

#[test]
fn partial_tables_keep_other_defaults() {
    let config = Config::parse("[grammar]\nmax_nesting_depth = 2\n").unwrap();
    assert_eq!(config.grammar.max_nesting_depth, 2);
    assert!(config.grammar.wrap_bare);
    assert_eq!(config.client_name, "DefaultClient");
}

#[yare::parameterized(
    top_level = { "colour = \"red\"\n" },
    grammar   = { "[grammar]\nmax_depth = 3\n" },
    build     = { "[build]\npolicy = \"skip\"\n" },
    bad_enum  = { "[build]\narity_policy = \"ignore\"\n" },
)]
fn rejects_unknown_or_invalid(text: &str) {
    assert!(Config::parse(text).is_err());
}

#[test]
fn from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "night = \"N7\"").unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.night, "N7");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn invalid_file_names_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "night = 3").unwrap();
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("invalid config"));
}
