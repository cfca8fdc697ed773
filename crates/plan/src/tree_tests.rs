// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::{ArityPolicy, BuildConfig, TreeBuilder};
use obsplan_grammar::Parser;
use serde_json::json;

const PLAN: &str = "\
BEGINSEQUENCE ak=6
    OBJECT FF_Aql 18:58:14.75 17:21:39.29 seq=5/I/60
    BEGINSEQUENCE focus=+30
        ZERO
        OBJECT V496_Aql 19:08:20.77 -07:26:15.89 seq=1/V/20
    ENDSEQUENCE
    DARK
ENDSEQUENCE
BEGINSEQUENCE
    OBJECT NG31 12:12:12 20:20:20
ENDSEQUENCE
";

fn plan() -> NightPlan {
    let ir = Parser::parse(PLAN).unwrap();
    TreeBuilder::default().build(&NightId::new("N1"), &ir).unwrap()
}

#[test]
fn commands_are_depth_first_in_source_order() {
    let plan = plan();
    let ids: Vec<_> = plan.commands().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["N1_0_0", "N1_0_1_0", "N1_0_1_1", "N1_0_2", "N1_1_0"]);
}

#[test]
fn actions_follow_command_order() {
    let plan = plan();
    let ids: Vec<_> = plan.actions().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "N1_0_0_0", "N1_0_0_1", "N1_0_0_2", "N1_0_0_3", // FF_Aql
            "N1_0_1_1_0", "N1_0_1_1_1", "N1_0_1_1_2", "N1_0_1_1_3", // V496_Aql
            "N1_1_0_0", "N1_1_0_1", // NG31
        ]
    );
}

#[test]
fn empty_night_has_no_commands() {
    let plan = NightPlan {
        id: NightId::new("N1"),
        sequences: Vec::new(),
    };
    assert_eq!(plan.commands().count(), 0);
    assert_eq!(plan.sequence_count(), 0);
}

#[test]
fn sequence_count_includes_nested() {
    assert_eq!(plan().sequence_count(), 3);
}

#[yare::parameterized(
    top_level = { "N1_0", true },
    nested    = { "N1_0_1", true },
    command   = { "N1_0_1_1", false },
    last      = { "N1_1_0", false },
)]
fn find_by_id(id: &str, is_sequence: bool) {
    let plan = plan();
    let found = plan.find(&NodeId::new(id)).unwrap();
    assert_eq!(found.id(), id);
    assert_eq!(matches!(found, NodeRef::Sequence(_)), is_sequence);
}

#[yare::parameterized(
    unknown_sequence = { "N1_7" },
    unknown_child    = { "N1_0_9" },
    action_id        = { "N1_0_0_1" },
    other_night      = { "N2_0" },
    prefix_only      = { "N1_01" },
)]
fn find_misses(id: &str) {
    assert!(plan().find(&NodeId::new(id)).is_none());
}

#[test]
fn found_node_exposes_effective_kwargs() {
    let plan = plan();
    let zero = plan.find(&NodeId::new("N1_0_1_0")).unwrap();
    assert_eq!(zero.effective_kwargs().get("focus").map(String::as_str), Some("+30"));
    assert_eq!(zero.effective_kwargs().get("ak").map(String::as_str), Some("6"));
}

#[test]
fn json_shape() {
    let ir = Parser::parse("BEGINSEQUENCE ak=6\nOBJECT x 1 2 seq=1/V/20\nENDSEQUENCE").unwrap();
    let plan = TreeBuilder::default().build(&NightId::new("N1"), &ir).unwrap();
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(value["id"], json!("N1"));
    let seq = &value["sequences"][0];
    assert_eq!(seq["effective_kwargs"], json!({"ak": "6"}));
    let cmd = &seq["children"][0];
    assert_eq!(cmd["kind"], json!("command"));
    assert_eq!(cmd["id"], json!("N1_0_0"));
    assert!(cmd.get("error").is_none());
    assert_eq!(
        cmd["actions"][3],
        json!({"id": "N1_0_0_3", "kind": "camera_exposure", "count": 1, "exposure_time": 20.0})
    );
}

#[test]
fn skipped_command_serializes_its_error() {
    let ir = Parser::parse("OBJECT x").unwrap();
    let builder = TreeBuilder::new(BuildConfig::default().with_arity_policy(ArityPolicy::Skip));
    let plan = builder.build(&NightId::new("N1"), &ir).unwrap();
    let value = serde_json::to_value(&plan).unwrap();
    let error = &value["sequences"][0]["children"][0]["error"];
    assert_eq!(error["kind"], json!("arity"));
    assert_eq!(error["found"], json!(1));
}
