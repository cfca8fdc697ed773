// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod blocks;
mod errors;
mod kwargs;
mod wrapping;

mod helpers {
    use crate::ir::{CommandNode, IrNode, PlanIr, SequenceNode};
    use crate::parse_error::SyntaxError;
    use crate::parser::Parser;

    pub fn parse_ok(input: &str) -> PlanIr {
        match Parser::parse(input) {
            Ok(ir) => ir,
            Err(e) => panic!("parse failed: {}\n{}", e, e.diagnostic(input)),
        }
    }

    pub fn parse_err(input: &str) -> SyntaxError {
        match Parser::parse(input) {
            Ok(ir) => panic!("expected a syntax error, got {ir:?}"),
            Err(e) => e,
        }
    }

    pub fn as_command(node: &IrNode) -> &CommandNode {
        match node {
            IrNode::Command(cmd) => cmd,
            other => panic!("expected command, got {other:?}"),
        }
    }

    pub fn as_sequence(node: &IrNode) -> &SequenceNode {
        match node {
            IrNode::Sequence(seq) => seq,
            other => panic!("expected sequence, got {other:?}"),
        }
    }

    /// The only command of a single-line plan.
    pub fn single_command(input: &str) -> CommandNode {
        let ir = parse_ok(input);
        assert_eq!(ir.sequences.len(), 1);
        assert_eq!(ir.sequences[0].children.len(), 1);
        as_command(&ir.sequences[0].children[0]).clone()
    }

    pub fn kwarg<'a>(cmd: &'a CommandNode, key: &str) -> Option<&'a str> {
        cmd.kwargs.get(key).map(String::as_str)
    }
}
