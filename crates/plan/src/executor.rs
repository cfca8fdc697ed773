// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution seam between a built plan and whatever drives the hardware.

use obsplan_core::Action;
use thiserror::Error;

/// An executor refused or failed an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("{action} rejected: {message}")]
    Rejected { action: &'static str, message: String },
    #[error("executor unavailable: {0}")]
    Unavailable(String),
}

/// Receives a night's actions one at a time, in order.
pub trait ActionExecutor {
    fn execute(&mut self, action: &Action) -> Result<(), ExecError>;
}

/// Logs each action and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingExecutor;

impl ActionExecutor for LoggingExecutor {
    fn execute(&mut self, action: &Action) -> Result<(), ExecError> {
        tracing::info!(id = %action.id, action = action.kind.name(), "{}", action.kind);
        Ok(())
    }
}
