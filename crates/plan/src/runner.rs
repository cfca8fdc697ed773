// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text-to-registry façade: parse, build and register a night in one call.

use crate::builder::TreeBuilder;
use crate::config::BuildConfig;
use crate::error::PlanError;
use crate::executor::ActionExecutor;
use crate::registry::ObservationPlan;
use obsplan_grammar::{GrammarConfig, Parser};

#[derive(Debug, Clone)]
pub struct PlanRunner {
    observation_plan: ObservationPlan,
    grammar: GrammarConfig,
    plan_text: Option<String>,
}

impl PlanRunner {
    pub fn new(client_name: impl Into<String>, plan_id: impl Into<String>) -> Self {
        Self::with_config(
            client_name,
            plan_id,
            GrammarConfig::default(),
            BuildConfig::default(),
        )
    }

    pub fn with_config(
        client_name: impl Into<String>,
        plan_id: impl Into<String>,
        grammar: GrammarConfig,
        build: BuildConfig,
    ) -> Self {
        Self {
            observation_plan: ObservationPlan::with_builder(
                client_name,
                plan_id,
                TreeBuilder::new(build),
            ),
            grammar,
            plan_text: None,
        }
    }

    /// Parse `text` and register it as the plan for `night_id`.
    ///
    /// Syntax errors are reported before the registry is touched, and
    /// text that fails to parse never replaces [`Self::plan_text`].
    pub fn load_night_plan_string(
        &mut self,
        night_id: &str,
        text: &str,
        overwrite: bool,
    ) -> Result<(), PlanError> {
        tracing::debug!(night = night_id, bytes = text.len(), "parsing plan text");
        let ir = Parser::parse_with_config(text, &self.grammar)
            .map_err(|e| PlanError::syntax(night_id, e, text))?;

        if self.plan_text.replace(text.to_string()).is_some() {
            tracing::info!(night = night_id, "plan text replaced");
        } else {
            tracing::info!(night = night_id, "plan text loaded");
        }
        tracing::debug!(
            night = night_id,
            sequences = ir.sequences.len(),
            commands = ir.count_commands(),
            "parsed plan text"
        );
        self.observation_plan.write_nightplan(night_id, &ir, overwrite)
    }

    /// The most recent plan text that parsed.
    pub fn plan_text(&self) -> Option<&str> {
        self.plan_text.as_deref()
    }

    pub fn run_night(&self, night_id: &str) -> Result<(), PlanError> {
        self.observation_plan.run_night(night_id)
    }

    pub fn run_night_with(
        &self,
        night_id: &str,
        executor: &mut dyn ActionExecutor,
    ) -> Result<(), PlanError> {
        self.observation_plan.run_night_with(night_id, executor)
    }

    pub fn observation_plan(&self) -> &ObservationPlan {
        &self.observation_plan
    }

    pub fn into_observation_plan(self) -> ObservationPlan {
        self.observation_plan
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
