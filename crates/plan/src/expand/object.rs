// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `OBJECT name ra dec [seq=...]`: point, slave the dome, then expose.

use super::{parse_seq, CommandExpander, ExpandError, ExpansionInput};
use obsplan_core::ActionKind;

/// Expansion rule for `OBJECT`.
///
/// Two positional arguments are read as `ra dec`; three or more as
/// `name ra dec ...`. Each `seq` group adds a filter change and an exposure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectExpander;

impl ObjectExpander {
    pub const NAME: &'static str = "OBJECT";
}

impl CommandExpander for ObjectExpander {
    fn expand(&self, input: &ExpansionInput<'_>) -> Result<Vec<ActionKind>, ExpandError> {
        let (ra, dec) = match input.args {
            [ra, dec] => (ra, dec),
            [_, ra, dec, ..] => (ra, dec),
            _ => {
                return Err(ExpandError::Arity {
                    what: format!("positional arguments for {}", input.name),
                    expected: "at least 2 (ra dec)",
                    found: input.args.len(),
                })
            }
        };

        let mut actions = vec![
            ActionKind::MountSlewCooSync {
                ra: ra.clone(),
                dec: dec.clone(),
            },
            ActionKind::DomeSlaveTelescope,
        ];

        if let Some(seq) = input.kwarg("seq") {
            for group in parse_seq(seq)? {
                actions.push(ActionKind::ChangeFilter {
                    filter: group.filter,
                });
                actions.push(ActionKind::CameraExposure {
                    count: group.count,
                    exposure_time: group.exposure_time,
                });
            }
        }

        Ok(actions)
    }
}
