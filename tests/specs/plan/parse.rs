//! `obsplan parse` specs

use crate::prelude::*;

#[test]
fn parse_prints_canonical_plan() {
    let temp = Project::empty();
    temp.file("plan.txt", NESTED_PLAN);

    temp.obsplan().args(&["parse", "plan.txt"]).passes().stdout_eq(
        "\
BEGINSEQUENCE execute_parallel=true
    BEGINSEQUENCE focus=+30 seq=1/I/5
        OBJECT HD1 1 2
        OBJECT HD2 3 4 focus=-10
    ENDSEQUENCE
    ZERO
ENDSEQUENCE
",
    );
}

#[test]
fn parse_wraps_bare_commands() {
    let temp = Project::empty();
    temp.file("plan.txt", "# calibration\nZERO seq=15/I/0\n\nDARK seq=10/V/300\n");

    temp.obsplan().args(&["parse", "plan.txt"]).passes().stdout_eq(
        "\
BEGINSEQUENCE
    ZERO seq=15/I/0
    DARK seq=10/V/300
ENDSEQUENCE
",
    );
}

#[test]
fn parse_empty_plan_prints_nothing() {
    let temp = Project::empty();
    temp.file("plan.txt", "# nothing tonight\n\n");

    temp.obsplan()
        .args(&["parse", "plan.txt"])
        .passes()
        .stdout_eq("");
}

#[test]
fn parse_json_is_the_ir() {
    let temp = Project::empty();
    temp.file("plan.txt", SINGLE_OBJECT_PLAN);

    let run = temp
        .obsplan()
        .args(&["-o", "json", "parse", "plan.txt"])
        .passes();
    let ir = run.stdout_json();
    let sequence = &ir["sequences"][0];
    assert_eq!(sequence["kwargs"]["ak"], "6");
    let command = &sequence["children"][0];
    assert_eq!(command["kind"], "command");
    assert_eq!(command["name"], "OBJECT");
    assert_eq!(
        command["args"],
        serde_json::json!(["FF_Aql", "18:58:14.75", "17:21:39.29"])
    );
    assert_eq!(command["kwargs"]["seq"], "1/V/20");
}
