// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command expansion: turning a command's arguments into executor actions.
//!
//! Each command name may have one [`CommandExpander`] registered in an
//! [`ExpanderRegistry`]. Commands without one expand to no actions.

mod object;
mod seq;

pub use object::ObjectExpander;
pub use seq::{parse_seq, SeqGroup};

use indexmap::IndexMap;
use obsplan_core::{ActionKind, Kwargs};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A command's arguments could not be turned into actions.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpandError {
    #[error("wrong number of {what}: expected {expected}, got {found}")]
    Arity {
        what: String,
        expected: &'static str,
        found: usize,
    },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// What an expander sees of one command.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionInput<'a> {
    pub name: &'a str,
    pub args: &'a [String],
    /// Effective keyword arguments, inherited ones included.
    pub kwargs: &'a Kwargs,
}

impl ExpansionInput<'_> {
    pub fn kwarg(&self, key: &str) -> Option<&str> {
        self.kwargs.get(key).map(String::as_str)
    }
}

/// Expansion rule for one command name.
pub trait CommandExpander: Send + Sync {
    /// Produce the command's actions in execution order.
    fn expand(&self, input: &ExpansionInput<'_>) -> Result<Vec<ActionKind>, ExpandError>;
}

impl<F> CommandExpander for F
where
    F: Fn(&ExpansionInput<'_>) -> Result<Vec<ActionKind>, ExpandError> + Send + Sync,
{
    fn expand(&self, input: &ExpansionInput<'_>) -> Result<Vec<ActionKind>, ExpandError> {
        self(input)
    }
}

/// Expanders keyed by command name.
#[derive(Clone, Default)]
pub struct ExpanderRegistry {
    expanders: IndexMap<String, Arc<dyn CommandExpander>>,
}

impl ExpanderRegistry {
    /// An empty registry: every command expands to nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `OBJECT` rule.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ObjectExpander::NAME, ObjectExpander);
        registry
    }

    /// Register `expander` for `name`, returning the one it replaces.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        expander: impl CommandExpander + 'static,
    ) -> Option<Arc<dyn CommandExpander>> {
        self.expanders.insert(name.into(), Arc::new(expander))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.expanders.contains_key(name)
    }

    /// Registered command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.expanders.keys().map(String::as_str)
    }

    /// Expand one command; unregistered names yield no actions.
    pub fn expand(&self, input: &ExpansionInput<'_>) -> Result<Vec<ActionKind>, ExpandError> {
        match self.expanders.get(input.name) {
            Some(expander) => expander.expand(input),
            None => Ok(Vec::new()),
        }
    }
}

impl fmt::Debug for ExpanderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpanderRegistry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[path = "../expand_tests/mod.rs"]
mod tests;
