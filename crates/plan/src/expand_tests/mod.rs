// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod object;
mod registry;
mod seq;

use super::ExpansionInput;
use obsplan_core::Kwargs;

/// Owned arguments for building an [`ExpansionInput`] in tests.
pub(super) struct Command {
    name: String,
    args: Vec<String>,
    kwargs: Kwargs,
}

impl Command {
    pub fn new(name: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            kwargs: Kwargs::new(),
        }
    }

    pub fn kwarg(mut self, key: &str, value: &str) -> Self {
        self.kwargs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn input(&self) -> ExpansionInput<'_> {
        ExpansionInput {
            name: &self.name,
            args: &self.args,
            kwargs: &self.kwargs,
        }
    }
}
