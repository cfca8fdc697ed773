//! Config file specs

use crate::prelude::*;

#[test]
fn config_in_working_directory_sets_night() {
    let temp = Project::empty();
    temp.file("obsplan.toml", "night = \"N7\"\n");
    temp.file("plan.txt", "ZERO\n");

    temp.obsplan()
        .args(&["build", "plan.txt"])
        .passes()
        .stdout_eq("night N7\n    N7_0 sequence\n        N7_0_0 ZERO\n");
}

#[test]
fn explicit_config_and_arity_policy() {
    let temp = Project::empty();
    temp.file("site.toml", "[build]\narity_policy = \"skip\"\n");
    temp.file("plan.txt", "OBJECT lonely\nZERO\n");

    temp.obsplan()
        .args(&["--config", "site.toml", "build", "plan.txt", "--night", "N1"])
        .passes()
        .stdout_has("N1_0_0 OBJECT lonely\n")
        .stdout_has("skipped: wrong number of positional arguments for OBJECT")
        .stdout_has("N1_0_1 ZERO\n")
        .stderr_has("skipping command");
}

#[test]
fn arity_flag_overrides_config() {
    let temp = Project::empty();
    temp.file("obsplan.toml", "[build]\narity_policy = \"skip\"\n");
    temp.file("plan.txt", "OBJECT lonely\n");

    temp.obsplan()
        .args(&["build", "plan.txt", "--arity", "abort"])
        .fails()
        .stderr_has("cannot expand OBJECT command");
}

#[test]
fn nesting_limit_from_config() {
    let temp = Project::empty();
    temp.file("obsplan.toml", "[grammar]\nmax_nesting_depth = 1\n");
    temp.file(
        "plan.txt",
        "BEGINSEQUENCE\nBEGINSEQUENCE\nZERO\nENDSEQUENCE\nENDSEQUENCE\n",
    );

    temp.obsplan()
        .args(&["parse", "plan.txt"])
        .fails()
        .stderr_has("sequence nesting depth 2 exceeds maximum of 1");
}

#[test]
fn unknown_config_key_is_rejected() {
    let temp = Project::empty();
    temp.file("obsplan.toml", "nights = \"N1\"\n");
    temp.file("plan.txt", "ZERO\n");

    temp.obsplan()
        .args(&["parse", "plan.txt"])
        .fails()
        .stderr_has("Error: invalid config obsplan.toml")
        .stderr_has("unknown field `nights`");
}

#[test]
fn missing_explicit_config() {
    let temp = Project::empty();
    temp.file("plan.txt", "ZERO\n");

    temp.obsplan()
        .args(&["--config", "nope.toml", "parse", "plan.txt"])
        .fails()
        .stderr_has("failed to read config nope.toml");
}
