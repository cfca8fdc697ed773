// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime plan tree produced by the builder.
//!
//! ```text
//! NightPlan (N1)
//! └── SequenceInstance (N1_0)
//!     ├── CommandInstance (N1_0_0) ── Action (N1_0_0_0), Action (N1_0_0_1), ...
//!     └── SequenceInstance (N1_0_1)
//!         └── CommandInstance (N1_0_1_0)
//! ```

use crate::expand::ExpandError;
use obsplan_core::{Action, Kwargs, NightId, NodeId};
use serde::Serialize;

/// The built plan for one night.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NightPlan {
    pub id: NightId,
    pub sequences: Vec<SequenceInstance>,
}

/// A child of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Sequence(SequenceInstance),
    Command(CommandInstance),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceInstance {
    pub id: NodeId,
    pub args: Vec<String>,
    /// Keyword arguments declared on this sequence.
    pub kwargs: Kwargs,
    /// Own keyword arguments merged over every ancestor's.
    pub effective_kwargs: Kwargs,
    pub children: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandInstance {
    pub id: NodeId,
    pub name: String,
    pub args: Vec<String>,
    pub kwargs: Kwargs,
    pub effective_kwargs: Kwargs,
    pub actions: Vec<Action>,
    /// Why `actions` is empty, when the build skipped a failed expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ExpandError>,
}

/// A borrowed sequence or command found by ID.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Sequence(&'a SequenceInstance),
    Command(&'a CommandInstance),
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> &'a NodeId {
        match *self {
            NodeRef::Sequence(seq) => &seq.id,
            NodeRef::Command(cmd) => &cmd.id,
        }
    }

    pub fn effective_kwargs(&self) -> &'a Kwargs {
        match *self {
            NodeRef::Sequence(seq) => &seq.effective_kwargs,
            NodeRef::Command(cmd) => &cmd.effective_kwargs,
        }
    }
}

impl TreeNode {
    pub fn id(&self) -> &NodeId {
        self.node_ref().id()
    }

    pub fn node_ref(&self) -> NodeRef<'_> {
        match self {
            TreeNode::Sequence(seq) => NodeRef::Sequence(seq),
            TreeNode::Command(cmd) => NodeRef::Command(cmd),
        }
    }
}

impl NightPlan {
    /// All commands, depth-first in source order.
    pub fn commands(&self) -> Commands<'_> {
        Commands {
            stack: self.sequences.iter().rev().map(|s| s.children.iter()).collect(),
        }
    }

    /// All actions, depth-first in source order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.commands().flat_map(|cmd| cmd.actions.iter())
    }

    /// Find the sequence or command with `id`.
    pub fn find(&self, id: &NodeId) -> Option<NodeRef<'_>> {
        let mut seq = self.sequences.iter().find(|s| id.is_within(&s.id))?;
        loop {
            if seq.id == *id {
                return Some(NodeRef::Sequence(seq));
            }
            match seq.children.iter().find(|c| id.is_within(c.id()))? {
                TreeNode::Sequence(inner) => seq = inner,
                TreeNode::Command(cmd) if cmd.id == *id => return Some(NodeRef::Command(cmd)),
                // Action IDs live below commands
                TreeNode::Command(_) => return None,
            }
        }
    }

    /// Number of sequences at any depth.
    pub fn sequence_count(&self) -> usize {
        fn count(seq: &SequenceInstance) -> usize {
            1 + seq
                .children
                .iter()
                .map(|child| match child {
                    TreeNode::Sequence(inner) => count(inner),
                    TreeNode::Command(_) => 0,
                })
                .sum::<usize>()
        }
        self.sequences.iter().map(count).sum()
    }
}

/// Depth-first iterator over a night's commands.
pub struct Commands<'a> {
    stack: Vec<std::slice::Iter<'a, TreeNode>>,
}

impl<'a> Iterator for Commands<'a> {
    type Item = &'a CommandInstance;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(TreeNode::Command(cmd)) => return Some(cmd),
                Some(TreeNode::Sequence(seq)) => self.stack.push(seq.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
