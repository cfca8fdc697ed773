// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Runtime plan trees: building, expansion, registration and dry runs.
//!
//! ```text
//! PlanIr ──TreeBuilder──▶ NightPlan ──ObservationPlan──▶ run_night ──▶ ActionExecutor
//!                 │
//!                 └── ExpanderRegistry (OBJECT → actions)
//! ```

mod builder;
mod config;
mod error;
mod executor;
pub mod expand;
mod registry;
mod runner;
mod shared;
mod tree;

pub use builder::TreeBuilder;
pub use config::{ArityPolicy, BuildConfig};
pub use error::PlanError;
pub use executor::{ActionExecutor, ExecError, LoggingExecutor};
pub use expand::{CommandExpander, ExpandError, ExpanderRegistry, ExpansionInput};
pub use registry::ObservationPlan;
pub use runner::PlanRunner;
pub use shared::SharedObservationPlan;
pub use tree::{Commands, CommandInstance, NightPlan, NodeRef, SequenceInstance, TreeNode};
