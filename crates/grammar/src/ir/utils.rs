// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Query helpers over a parsed plan.

use super::{CommandNode, IrNode, IrVisitor, PlanIr, SequenceNode};
use crate::parse_error::SyntaxError;
use crate::parser::Parser;

impl PlanIr {
    /// Parse plan text with the default grammar configuration.
    ///
    /// Convenience wrapper around [`Parser::parse`].
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        Parser::parse(input)
    }

    /// Number of command lines at any depth.
    pub fn count_commands(&self) -> usize {
        struct Counter(usize);
        impl IrVisitor for Counter {
            fn visit_command(&mut self, _cmd: &CommandNode) {
                self.0 += 1;
            }
        }
        let mut counter = Counter(0);
        counter.visit_plan(self);
        counter.0
    }

    /// Number of sequences at any depth, top-level ones included.
    pub fn count_sequences(&self) -> usize {
        struct Counter(usize);
        impl IrVisitor for Counter {
            fn visit_sequence(&mut self, seq: &SequenceNode) {
                self.0 += 1;
                self.walk_sequence(seq);
            }
        }
        let mut counter = Counter(0);
        counter.visit_plan(self);
        counter.0
    }

    /// Distinct command names in order of first appearance.
    pub fn command_names(&self) -> Vec<String> {
        struct Collector(Vec<String>);
        impl IrVisitor for Collector {
            fn visit_command(&mut self, cmd: &CommandNode) {
                if !self.0.contains(&cmd.name) {
                    self.0.push(cmd.name.clone());
                }
            }
        }
        let mut collector = Collector(Vec::new());
        collector.visit_plan(self);
        collector.0
    }

    /// Deepest sequence nesting; a single top-level sequence is depth 1.
    ///
    /// Walks with an explicit stack, so it is safe on IR of any depth.
    pub fn max_depth(&self) -> usize {
        let mut stack: Vec<(&SequenceNode, usize)> =
            self.sequences.iter().map(|seq| (seq, 1)).collect();
        let mut max = 0;
        while let Some((seq, depth)) = stack.pop() {
            max = max.max(depth);
            for child in &seq.children {
                if let IrNode::Sequence(inner) = child {
                    stack.push((inner, depth + 1));
                }
            }
        }
        max
    }
}
