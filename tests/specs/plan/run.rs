//! `obsplan run` specs

use crate::prelude::*;

#[test]
fn run_prints_actions_in_order() {
    let temp = Project::empty();
    temp.file(
        "plan.txt",
        "BEGINSEQUENCE ak=6\nOBJECT FF_Aql 18:58:14.75 17:21:39.29 seq=5/I/60,5/V/70\nENDSEQUENCE\n",
    );

    temp.obsplan()
        .args(&["run", "plan.txt", "--night", "N1"])
        .passes()
        .stdout_eq(
            "\
N1_0_0_0 MountSlewCooSync ra=18:58:14.75 dec=17:21:39.29
N1_0_0_1 DomeSlaveTelescope
N1_0_0_2 ChangeFilter filter=I
N1_0_0_3 CameraExposure count=5 exposure_time=60
N1_0_0_4 ChangeFilter filter=V
N1_0_0_5 CameraExposure count=5 exposure_time=70
",
        );
}

#[test]
fn run_logs_actions_to_stderr() {
    let temp = Project::empty();
    temp.file("plan.txt", SINGLE_OBJECT_PLAN);

    temp.obsplan()
        .args(&["run", "plan.txt"])
        .passes()
        .stderr_has("running night plan")
        .stderr_has("DomeSlaveTelescope");
}

#[test]
fn run_quiet_logging() {
    let temp = Project::empty();
    temp.file("plan.txt", SINGLE_OBJECT_PLAN);

    temp.obsplan()
        .args(&["run", "plan.txt"])
        .env("RUST_LOG", "warn")
        .passes()
        .stderr_lacks("running night plan");
}

#[test]
fn run_commands_without_rule_produce_nothing() {
    let temp = Project::empty();
    temp.file("plan.txt", "ZERO seq=15/I/0\nDARK seq=10/V/300\n");

    temp.obsplan()
        .args(&["run", "plan.txt"])
        .passes()
        .stdout_eq("");
}

#[test]
fn run_json_lists_actions() {
    let temp = Project::empty();
    temp.file("plan.txt", SINGLE_OBJECT_PLAN);

    let run = temp
        .obsplan()
        .args(&["-o", "json", "run", "plan.txt", "--night", "N1"])
        .passes();
    let actions = run.stdout_json();
    let actions = actions.as_array().unwrap();
    assert_eq!(actions.len(), 6);
    assert_eq!(actions[2]["id"], "N1_0_0_2");
    assert_eq!(actions[2]["filter"], "V");
    assert_eq!(actions[3]["count"], 1);
}
