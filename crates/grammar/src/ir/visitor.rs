// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visitor pattern for traversing the IR.

use super::{CommandNode, IrNode, PlanIr, SequenceNode};

/// Visitor trait for traversing the IR.
///
/// Each `visit_*` method has a corresponding `walk_*` method. Override a
/// `visit_*` method to act on that node type and call `walk_*` to descend;
/// skip the `walk_*` call to prune the subtree.
///
/// # Example: Collect Targets
///
/// ```ignore
/// use obsplan_grammar::{CommandNode, IrVisitor, Parser};
///
/// struct Targets(Vec<String>);
///
/// impl IrVisitor for Targets {
///     fn visit_command(&mut self, cmd: &CommandNode) {
///         if cmd.name == "OBJECT" {
///             self.0.extend(cmd.args.first().cloned());
///         }
///     }
/// }
///
/// let ir = Parser::parse("OBJECT FF_Aql 18:58:14.75 17:21:39.29")?;
/// let mut targets = Targets(Vec::new());
/// targets.visit_plan(&ir);
/// assert_eq!(targets.0, vec!["FF_Aql"]);
/// # Ok::<(), obsplan_grammar::SyntaxError>(())
/// ```
pub trait IrVisitor {
    fn visit_plan(&mut self, plan: &PlanIr) {
        self.walk_plan(plan);
    }

    fn visit_node(&mut self, node: &IrNode) {
        self.walk_node(node);
    }

    fn visit_sequence(&mut self, seq: &SequenceNode) {
        self.walk_sequence(seq);
    }

    /// Commands are leaves; the default does nothing.
    fn visit_command(&mut self, _cmd: &CommandNode) {}

    fn walk_plan(&mut self, plan: &PlanIr) {
        for seq in &plan.sequences {
            self.visit_sequence(seq);
        }
    }

    fn walk_node(&mut self, node: &IrNode) {
        match node {
            IrNode::Sequence(seq) => self.visit_sequence(seq),
            IrNode::Command(cmd) => self.visit_command(cmd),
        }
    }

    fn walk_sequence(&mut self, seq: &SequenceNode) {
        for child in &seq.children {
            self.visit_node(child);
        }
    }
}
