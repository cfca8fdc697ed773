//! CLI error handling specs
//!
//! Failures print `Error: ...` on stderr and exit with code 1.

use crate::prelude::*;

#[test]
fn missing_plan_file() {
    let temp = Project::empty();
    let run = temp
        .obsplan()
        .args(&["parse", "missing.txt"])
        .fails()
        .stderr_has("Error: failed to read missing.txt");
    assert_eq!(run.code(), Some(1));
}

#[test]
fn syntax_error_points_at_the_line() {
    let temp = Project::empty();
    temp.file(
        "plan.txt",
        "BEGINSEQUENCE\nOBJECT x 1 2\nENDSEQUENCE\nENDSEQUENCE\n",
    );

    temp.obsplan()
        .args(&["parse", "plan.txt"])
        .fails()
        .stderr_has("Error: syntax error in plan.txt:")
        .stderr_has("'ENDSEQUENCE' at position 39 has no matching 'BEGINSEQUENCE'")
        .stderr_has("  --> line 4, column 1")
        .stderr_has("  4 | ENDSEQUENCE");
}

#[test]
fn unclosed_sequence_fails_build() {
    let temp = Project::empty();
    temp.file("plan.txt", "BEGINSEQUENCE\nOBJECT x 1 2\n");

    temp.obsplan()
        .args(&["build", "plan.txt"])
        .fails()
        .stderr_has("is never closed by 'ENDSEQUENCE'");
}

#[test]
fn arity_error_names_the_command() {
    let temp = Project::empty();
    temp.file("plan.txt", "BEGINSEQUENCE\nOBJECT lonely\nENDSEQUENCE\n");

    temp.obsplan()
        .args(&["run", "plan.txt", "--night", "N1"])
        .fails()
        .stderr_has("Error: cannot expand OBJECT command N1_0_0")
        .stderr_has("expected at least 2 (ra dec), got 1");
}

#[test]
fn invalid_seq_value() {
    let temp = Project::empty();
    temp.file("plan.txt", "OBJECT x 1 2 seq=0/V/20\n");

    temp.obsplan()
        .args(&["build", "plan.txt"])
        .fails()
        .stderr_has("cannot expand OBJECT command night_0_0");
}

#[test]
fn unknown_arity_policy_is_a_usage_error() {
    cli()
        .args(&["build", "plan.txt", "--arity", "ignore"])
        .fails()
        .stderr_has("invalid value 'ignore'");
}

#[test]
fn runaway_nesting_is_a_syntax_error() {
    let temp = Project::empty();
    let plan = format!(
        "{}ZERO\n{}",
        "BEGINSEQUENCE\n".repeat(1000),
        "ENDSEQUENCE\n".repeat(1000)
    );
    temp.file("plan.txt", &plan);

    temp.obsplan()
        .args(&["parse", "plan.txt"])
        .fails()
        .stderr_has("sequence nesting depth 257 exceeds maximum of 256")
        .stderr_has("  --> line 257, column 1");
}

#[test]
fn night_id_with_separator_is_refused() {
    let temp = Project::empty();
    temp.file("plan.txt", "ZERO\n");

    temp.obsplan()
        .args(&["build", "plan.txt", "--night", "N_1"])
        .fails()
        .stderr_has("invalid night ID 'N_1': night ID contains the '_' ID separator");
}

#[test]
fn quoted_comma_in_value_is_refused() {
    let temp = Project::empty();
    temp.file("plan.txt", "ZERO note=\"a,b\",c\n");

    temp.obsplan()
        .args(&["parse", "plan.txt"])
        .fails()
        .stderr_has("quoted value of 'note' contains ','");
}
