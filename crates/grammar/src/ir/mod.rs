// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Intermediate representation of a parsed plan.
//!
//! ```text
//! PlanIr
//! └── SequenceNode[]
//!     ├── args: String[]
//!     ├── kwargs: key → value
//!     └── children: IrNode[]
//!         ├── Sequence(SequenceNode)   (recursive)
//!         └── Command(CommandNode)
//! ```
//!
//! Serializes to JSON with a `kind` tag on each child so that IR written by
//! `obsplan parse -o json` can be fed back into the tree builder.

mod utils;
mod visitor;

pub use visitor::IrVisitor;

use crate::span::Span;
use obsplan_core::Kwargs;
use serde::{Deserialize, Serialize};

/// The parsed form of one plan text: its top-level sequences in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanIr {
    pub sequences: Vec<SequenceNode>,
    #[serde(default)]
    pub span: Span,
}

/// A child of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IrNode {
    Sequence(SequenceNode),
    Command(CommandNode),
}

impl IrNode {
    pub fn span(&self) -> Span {
        match self {
            IrNode::Sequence(seq) => seq.span,
            IrNode::Command(cmd) => cmd.span,
        }
    }
}

/// A `BEGINSEQUENCE … ENDSEQUENCE` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceNode {
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub kwargs: Kwargs,
    #[serde(default)]
    pub children: Vec<IrNode>,
    #[serde(default)]
    pub span: Span,
}

impl SequenceNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<IrNode>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// A single command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandNode {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub kwargs: Kwargs,
    #[serde(default)]
    pub span: Span,
}

impl CommandNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }
}

impl From<SequenceNode> for IrNode {
    fn from(seq: SequenceNode) -> Self {
        IrNode::Sequence(seq)
    }
}

impl From<CommandNode> for IrNode {
    fn from(cmd: CommandNode) -> Self {
        IrNode::Command(cmd)
    }
}

impl From<Vec<SequenceNode>> for PlanIr {
    fn from(sequences: Vec<SequenceNode>) -> Self {
        Self {
            sequences,
            span: Span::default(),
        }
    }
}

#[cfg(test)]
#[path = "../ir_tests.rs"]
mod tests;
