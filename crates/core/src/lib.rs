// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! obsplan-core: shared types for the observation plan compiler

pub mod action;
pub mod id;
pub mod kwargs;

pub use action::{Action, ActionKind};
pub use id::{NightId, NodeId, ID_SEPARATOR};
pub use kwargs::{join_values, merge, split_values, Kwargs, LIST_SEPARATOR};
