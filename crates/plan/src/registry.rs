// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observation plan: the per-client registry of night plans.

use crate::builder::TreeBuilder;
use crate::error::PlanError;
use crate::executor::{ActionExecutor, LoggingExecutor};
use crate::tree::NightPlan;
use indexmap::IndexMap;
use obsplan_core::NightId;
use obsplan_grammar::PlanIr;

/// Night plans of one client session, keyed by night ID.
///
/// A night ID is written once; replacing it requires an explicit overwrite.
/// Nights are kept in registration order.
#[derive(Debug, Clone)]
pub struct ObservationPlan {
    client_name: String,
    plan_id: String,
    builder: TreeBuilder,
    nights: IndexMap<NightId, NightPlan>,
}

impl ObservationPlan {
    pub fn new(client_name: impl Into<String>, plan_id: impl Into<String>) -> Self {
        Self::with_builder(client_name, plan_id, TreeBuilder::default())
    }

    pub fn with_builder(
        client_name: impl Into<String>,
        plan_id: impl Into<String>,
        builder: TreeBuilder,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            plan_id: plan_id.into(),
            builder,
            nights: IndexMap::new(),
        }
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    pub fn builder(&self) -> &TreeBuilder {
        &self.builder
    }

    /// Build `ir` and register it under `night_id`.
    ///
    /// An existing night is only replaced when `overwrite` is set; otherwise
    /// this fails with [`PlanError::DuplicatePlan`] before building anything.
    /// A failed build leaves the registry unchanged. Night IDs must pass
    /// [`NightId::validate`] so node IDs never collide across nights.
    pub fn write_nightplan(
        &mut self,
        night_id: impl Into<NightId>,
        ir: &PlanIr,
        overwrite: bool,
    ) -> Result<(), PlanError> {
        let night_id = night_id.into();
        if let Err(reason) = night_id.validate() {
            return Err(PlanError::InvalidNightId {
                night: night_id,
                reason,
            });
        }
        let exists = self.nights.contains_key(&night_id);
        if exists && !overwrite {
            return Err(PlanError::DuplicatePlan(night_id));
        }

        let plan = self.builder.build(&night_id, ir)?;
        if exists {
            tracing::info!(
                client = %self.client_name,
                plan = %self.plan_id,
                night = %night_id,
                "night plan overwritten"
            );
        } else {
            tracing::info!(
                client = %self.client_name,
                plan = %self.plan_id,
                night = %night_id,
                "night plan written"
            );
        }
        self.nights.insert(night_id, plan);
        Ok(())
    }

    pub fn get_nightplan(&self, night_id: &str) -> Option<&NightPlan> {
        self.nights.get(night_id)
    }

    pub fn remove_nightplan(&mut self, night_id: &str) -> Option<NightPlan> {
        self.nights.shift_remove(night_id)
    }

    /// Night IDs in registration order.
    pub fn night_ids(&self) -> impl Iterator<Item = &NightId> {
        self.nights.keys()
    }

    pub fn len(&self) -> usize {
        self.nights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nights.is_empty()
    }

    /// Dry-run a night through the [`LoggingExecutor`].
    pub fn run_night(&self, night_id: &str) -> Result<(), PlanError> {
        self.run_night_with(night_id, &mut LoggingExecutor)
    }

    /// Hand every action of a night to `executor`, depth-first in source
    /// order, stopping at the first failure.
    pub fn run_night_with(
        &self,
        night_id: &str,
        executor: &mut dyn ActionExecutor,
    ) -> Result<(), PlanError> {
        let plan = self
            .get_nightplan(night_id)
            .ok_or_else(|| PlanError::NotFound(NightId::new(night_id)))?;

        tracing::info!(night = %plan.id, "running night plan");
        let mut executed = 0;
        for action in plan.actions() {
            executor
                .execute(action)
                .map_err(|source| PlanError::Execution {
                    action_id: action.id.clone(),
                    source,
                })?;
            executed += 1;
        }
        tracing::info!(night = %plan.id, actions = executed, "night plan finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
