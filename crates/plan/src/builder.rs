// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builds the runtime tree of a night from parsed IR.
//!
//! One top-down pass assigns hierarchical IDs, merges keyword arguments
//! into each node's effective set, checks command names and expands
//! commands into actions.

use crate::config::{ArityPolicy, BuildConfig};
use crate::error::PlanError;
use crate::expand::{ExpanderRegistry, ExpansionInput};
use crate::tree::{CommandInstance, NightPlan, SequenceInstance, TreeNode};
use obsplan_core::{merge, Action, Kwargs, NightId, NodeId};
use obsplan_grammar::{is_reserved_keyword, CommandNode, IrNode, PlanIr, SequenceNode};

#[derive(Debug, Clone)]
pub struct TreeBuilder {
    config: BuildConfig,
    expanders: ExpanderRegistry,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(BuildConfig::default())
    }
}

impl TreeBuilder {
    /// Builder with the default expanders.
    pub fn new(config: BuildConfig) -> Self {
        Self::with_expanders(config, ExpanderRegistry::with_defaults())
    }

    pub fn with_expanders(config: BuildConfig, expanders: ExpanderRegistry) -> Self {
        Self { config, expanders }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn expanders(&self) -> &ExpanderRegistry {
        &self.expanders
    }

    pub fn expanders_mut(&mut self) -> &mut ExpanderRegistry {
        &mut self.expanders
    }

    /// Build the tree for `night_id`.
    ///
    /// Top-level sequences get IDs `<night>_0`, `<night>_1`, ... in IR order.
    /// IR nested deeper than the configured cap is refused before any
    /// recursion.
    pub fn build(&self, night_id: &NightId, ir: &PlanIr) -> Result<NightPlan, PlanError> {
        let max = self.config.max_nesting_depth;
        if max > 0 {
            let depth = ir.max_depth();
            if depth > max {
                return Err(PlanError::NestingTooDeep {
                    night: night_id.clone(),
                    depth,
                    max,
                });
            }
        }

        let root = Kwargs::new();
        let sequences = ir
            .sequences
            .iter()
            .enumerate()
            .map(|(index, seq)| self.build_sequence(night_id.sequence(index), seq, &root))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(night = %night_id, sequences = sequences.len(), "built night plan");
        Ok(NightPlan {
            id: night_id.clone(),
            sequences,
        })
    }

    fn build_sequence(
        &self,
        id: NodeId,
        node: &SequenceNode,
        inherited: &Kwargs,
    ) -> Result<SequenceInstance, PlanError> {
        let effective_kwargs = merge(inherited, &node.kwargs);

        let mut children = Vec::with_capacity(node.children.len());
        for (ordinal, child) in node.children.iter().enumerate() {
            let child_id = id.child(ordinal);
            let built = match child {
                IrNode::Sequence(seq) => {
                    TreeNode::Sequence(self.build_sequence(child_id, seq, &effective_kwargs)?)
                }
                IrNode::Command(cmd) => {
                    check_command_name(&id, ordinal, &cmd.name)?;
                    TreeNode::Command(self.build_command(child_id, cmd, &effective_kwargs)?)
                }
            };
            children.push(built);
        }

        tracing::debug!(%id, children = children.len(), "built sequence");
        Ok(SequenceInstance {
            id,
            args: node.args.clone(),
            kwargs: node.kwargs.clone(),
            effective_kwargs,
            children,
        })
    }

    fn build_command(
        &self,
        id: NodeId,
        node: &CommandNode,
        inherited: &Kwargs,
    ) -> Result<CommandInstance, PlanError> {
        let effective_kwargs = merge(inherited, &node.kwargs);
        let input = ExpansionInput {
            name: &node.name,
            args: &node.args,
            kwargs: &effective_kwargs,
        };

        let (actions, error) = match self.expanders.expand(&input) {
            Ok(kinds) => {
                let actions = kinds
                    .into_iter()
                    .enumerate()
                    .map(|(ordinal, kind)| Action::new(id.child(ordinal), kind))
                    .collect();
                (actions, None)
            }
            Err(source) => match self.config.arity_policy {
                ArityPolicy::Abort => {
                    return Err(PlanError::ArgumentArity {
                        command_id: id,
                        command: node.name.clone(),
                        source,
                    })
                }
                ArityPolicy::Skip => {
                    tracing::warn!(%id, command = %node.name, error = %source, "skipping command");
                    (Vec::new(), Some(source))
                }
            },
        };

        tracing::debug!(%id, command = %node.name, actions = actions.len(), "built command");
        Ok(CommandInstance {
            id,
            name: node.name.clone(),
            args: node.args.clone(),
            kwargs: node.kwargs.clone(),
            effective_kwargs,
            actions,
            error,
        })
    }
}

/// A child must be a nested sequence or a command with a usable name.
fn check_command_name(parent: &NodeId, ordinal: usize, name: &str) -> Result<(), PlanError> {
    let reason = if name.trim().is_empty() {
        "command name is empty"
    } else if name.chars().any(char::is_whitespace) {
        "command name contains whitespace"
    } else if is_reserved_keyword(name) {
        "command name is a reserved block keyword"
    } else {
        return Ok(());
    };
    Err(PlanError::SequenceTree {
        parent: parent.clone(),
        ordinal,
        reason,
    })
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
