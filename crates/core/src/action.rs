// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Low-level executor actions expanded from plan commands.
//!
//! Serializes as an internally tagged enum:
//! - `{"kind": "mount_slew_coo_sync", "ra": "18:58:14.75", "dec": "17:21:39.29"}`
//! - `{"kind": "dome_slave_telescope"}`
//! - `{"kind": "change_filter", "filter": "V"}`
//! - `{"kind": "camera_exposure", "count": 5, "exposure_time": 60.0}`

use crate::id::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single executor step with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionKind {
    /// Slew the mount to equatorial coordinates and wait for it to settle.
    MountSlewCooSync { ra: String, dec: String },
    /// Slave the dome to the telescope position.
    DomeSlaveTelescope,
    /// Move the filter wheel.
    ChangeFilter { filter: String },
    /// Take `count` exposures of `exposure_time` seconds each.
    CameraExposure { count: u32, exposure_time: f64 },
}

impl ActionKind {
    /// Executor name of this action kind.
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::MountSlewCooSync { .. } => "MountSlewCooSync",
            ActionKind::DomeSlaveTelescope => "DomeSlaveTelescope",
            ActionKind::ChangeFilter { .. } => "ChangeFilter",
            ActionKind::CameraExposure { .. } => "CameraExposure",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::MountSlewCooSync { ra, dec } => {
                write!(f, "{} ra={} dec={}", self.name(), ra, dec)
            }
            ActionKind::DomeSlaveTelescope => write!(f, "{}", self.name()),
            ActionKind::ChangeFilter { filter } => write!(f, "{} filter={}", self.name(), filter),
            ActionKind::CameraExposure {
                count,
                exposure_time,
            } => write!(
                f,
                "{} count={} exposure_time={}",
                self.name(),
                count,
                exposure_time
            ),
        }
    }
}

/// An expanded action owned by a command instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: NodeId,
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl Action {
    pub fn new(id: NodeId, kind: ActionKind) -> Self {
        Self { id, kind }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.kind)
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
