// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for building, registering and running plans

use crate::executor::ExecError;
use crate::expand::ExpandError;
use obsplan_core::{NightId, NodeId};
use obsplan_grammar::SyntaxError;
use thiserror::Error;

/// Errors from the plan pipeline.
///
/// None of these leave a partial plan behind: a failed build installs
/// nothing, and a rejected write leaves the existing plan untouched.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("syntax error in plan for night {night}:\n{}", inner.diagnostic(source_text))]
    Syntax {
        night: NightId,
        inner: Box<SyntaxError>,
        source_text: String,
    },

    #[error("invalid child {ordinal} of {parent}: {reason}")]
    SequenceTree {
        parent: NodeId,
        ordinal: usize,
        reason: &'static str,
    },

    #[error("night plan {night} nests sequences {depth} deep, maximum is {max}")]
    NestingTooDeep {
        night: NightId,
        depth: usize,
        max: usize,
    },

    #[error("invalid night ID '{night}': {reason}")]
    InvalidNightId {
        night: NightId,
        reason: &'static str,
    },

    #[error("cannot expand {command} command {command_id}: {source}")]
    ArgumentArity {
        command_id: NodeId,
        command: String,
        #[source]
        source: ExpandError,
    },

    #[error("night plan {0} already exists; pass overwrite to replace it")]
    DuplicatePlan(NightId),

    #[error("night plan not found: {0}")]
    NotFound(NightId),

    #[error("action {action_id} failed: {source}")]
    Execution {
        action_id: NodeId,
        #[source]
        source: ExecError,
    },
}

impl PlanError {
    pub fn syntax(night: impl Into<NightId>, inner: SyntaxError, source_text: &str) -> Self {
        PlanError::Syntax {
            night: night.into(),
            inner: Box::new(inner),
            source_text: source_text.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
