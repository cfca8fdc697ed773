// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-safe handle to an [`ObservationPlan`].

use crate::error::PlanError;
use crate::executor::ActionExecutor;
use crate::registry::ObservationPlan;
use crate::tree::NightPlan;
use obsplan_core::NightId;
use obsplan_grammar::PlanIr;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable handle; every call holds the lock for its whole duration, so
/// the duplicate check and insert of a write cannot interleave.
#[derive(Debug, Clone)]
pub struct SharedObservationPlan {
    inner: Arc<Mutex<ObservationPlan>>,
}

impl SharedObservationPlan {
    pub fn new(plan: ObservationPlan) -> Self {
        Self {
            inner: Arc::new(Mutex::new(plan)),
        }
    }

    pub fn write_nightplan(
        &self,
        night_id: impl Into<NightId>,
        ir: &PlanIr,
        overwrite: bool,
    ) -> Result<(), PlanError> {
        self.inner.lock().write_nightplan(night_id, ir, overwrite)
    }

    /// A copy of the stored plan.
    pub fn get_nightplan(&self, night_id: &str) -> Option<NightPlan> {
        self.inner.lock().get_nightplan(night_id).cloned()
    }

    pub fn remove_nightplan(&self, night_id: &str) -> Option<NightPlan> {
        self.inner.lock().remove_nightplan(night_id)
    }

    pub fn night_ids(&self) -> Vec<NightId> {
        self.inner.lock().night_ids().cloned().collect()
    }

    pub fn run_night(&self, night_id: &str) -> Result<(), PlanError> {
        self.inner.lock().run_night(night_id)
    }

    pub fn run_night_with(
        &self,
        night_id: &str,
        executor: &mut dyn ActionExecutor,
    ) -> Result<(), PlanError> {
        self.inner.lock().run_night_with(night_id, executor)
    }

    /// Lock the registry for several operations at once.
    pub fn lock(&self) -> MutexGuard<'_, ObservationPlan> {
        self.inner.lock()
    }
}

impl From<ObservationPlan> for SharedObservationPlan {
    fn from(plan: ObservationPlan) -> Self {
        Self::new(plan)
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
