// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use obsplan_grammar::Parser;
use std::error::Error as _;

#[test]
fn syntax_error_renders_diagnostic() {
    let text = "BEGINSEQUENCE\nOBJECT a,b 1 2\nENDSEQUENCE";
    let inner = Parser::parse(text).unwrap_err();
    let err = PlanError::syntax("N1", inner, text);
    let message = err.to_string();
    assert!(message.starts_with("syntax error in plan for night N1:\nerror: "), "{message}");
    assert!(message.contains("--> line 2, column 9"), "{message}");
    assert!(message.contains("  2 | OBJECT a,b 1 2"), "{message}");
}

#[test]
fn argument_arity_keeps_source() {
    let err = PlanError::ArgumentArity {
        command_id: NodeId::new("N1_0_0"),
        command: "OBJECT".to_string(),
        source: ExpandError::Arity {
            what: "positional arguments for OBJECT".to_string(),
            expected: "at least 2 (ra dec)",
            found: 1,
        },
    };
    assert_eq!(
        err.to_string(),
        "cannot expand OBJECT command N1_0_0: wrong number of positional arguments for OBJECT: \
         expected at least 2 (ra dec), got 1"
    );
    assert!(err.source().is_some());
}

#[yare::parameterized(
    duplicate = { PlanError::DuplicatePlan(NightId::new("N1")), "night plan N1 already exists; pass overwrite to replace it" },
    not_found = { PlanError::NotFound(NightId::new("N2")), "night plan not found: N2" },
    tree      = { PlanError::SequenceTree { parent: NodeId::new("N1_0"), ordinal: 2, reason: "command name is empty" }, "invalid child 2 of N1_0: command name is empty" },
    too_deep  = { PlanError::NestingTooDeep { night: NightId::new("N1"), depth: 300, max: 256 }, "night plan N1 nests sequences 300 deep, maximum is 256" },
    bad_night = { PlanError::InvalidNightId { night: NightId::new("N_1"), reason: "night ID contains the '_' ID separator" }, "invalid night ID 'N_1': night ID contains the '_' ID separator" },
)]
fn display(err: PlanError, expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn execution_error_names_action() {
    let err = PlanError::Execution {
        action_id: NodeId::new("N1_0_0_2"),
        source: ExecError::Unavailable("filter wheel offline".to_string()),
    };
    assert_eq!(
        err.to_string(),
        "action N1_0_0_2 failed: executor unavailable: filter wheel offline"
    );
}
