//! `obsplan build` specs

use crate::prelude::*;

#[test]
fn build_prints_tree_with_ids_and_effective_kwargs() {
    let temp = Project::empty();
    temp.file("plan.txt", NESTED_PLAN);

    temp.obsplan()
        .args(&["build", "plan.txt", "--night", "N1"])
        .passes()
        .stdout_eq(
            "\
night N1
    N1_0 sequence execute_parallel=true
        N1_0_0 sequence focus=+30 seq=1/I/5
            N1_0_0_0 OBJECT HD1 1 2 execute_parallel=true focus=+30 seq=1/I/5
                N1_0_0_0_0 MountSlewCooSync ra=1 dec=2
                N1_0_0_0_1 DomeSlaveTelescope
                N1_0_0_0_2 ChangeFilter filter=I
                N1_0_0_0_3 CameraExposure count=1 exposure_time=5
            N1_0_0_1 OBJECT HD2 3 4 execute_parallel=true focus=-10 seq=1/I/5
                N1_0_0_1_0 MountSlewCooSync ra=3 dec=4
                N1_0_0_1_1 DomeSlaveTelescope
                N1_0_0_1_2 ChangeFilter filter=I
                N1_0_0_1_3 CameraExposure count=1 exposure_time=5
        N1_0_1 ZERO execute_parallel=true
",
        );
}

#[test]
fn build_uses_default_night() {
    let temp = Project::empty();
    temp.file("plan.txt", "ZERO\n");

    temp.obsplan()
        .args(&["build", "plan.txt"])
        .passes()
        .stdout_eq("night night\n    night_0 sequence\n        night_0_0 ZERO\n");
}

#[test]
fn build_json_has_ids_and_actions() {
    let temp = Project::empty();
    temp.file("plan.txt", SINGLE_OBJECT_PLAN);

    let run = temp
        .obsplan()
        .args(&["-o", "json", "build", "plan.txt", "--night", "N1"])
        .passes();
    let night = run.stdout_json();
    assert_eq!(night["id"], "N1");
    let command = &night["sequences"][0]["children"][0];
    assert_eq!(command["id"], "N1_0_0");
    assert_eq!(command["effective_kwargs"]["ak"], "6");
    let actions = command["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 6);
    assert_eq!(actions[0]["id"], "N1_0_0_0");
    assert_eq!(actions[0]["ra"], "18:58:14.75");
    assert_eq!(actions[5]["exposure_time"], 20.0);
}

#[test]
fn build_from_ir_matches_build_from_text() {
    let temp = Project::empty();
    temp.file("plan.txt", NESTED_PLAN);

    let ir = temp
        .obsplan()
        .args(&["-o", "json", "parse", "plan.txt"])
        .passes()
        .stdout();
    temp.file("plan.json", &ir);

    let from_text = temp
        .obsplan()
        .args(&["build", "plan.txt", "--night", "N1"])
        .passes()
        .stdout();
    temp.obsplan()
        .args(&["build", "--ir", "plan.json", "--night", "N1"])
        .passes()
        .stdout_eq(&from_text);
}

#[test]
fn build_rejects_invalid_ir() {
    let temp = Project::empty();
    temp.file("plan.json", "[1, 2, 3]");

    temp.obsplan()
        .args(&["build", "--ir", "plan.json"])
        .fails()
        .stderr_has("Error: invalid plan IR in plan.json");
}
