// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::Command;
use crate::expand::{ExpandError, ExpanderRegistry, ExpansionInput};
use obsplan_core::ActionKind;

#[test]
fn defaults_register_object_only() {
    let registry = ExpanderRegistry::with_defaults();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["OBJECT"]);
    assert!(registry.contains("OBJECT"));
    assert!(!registry.contains("ZERO"));
}

#[test]
fn unregistered_command_expands_to_nothing() {
    let registry = ExpanderRegistry::with_defaults();
    let cmd = Command::new("ZERO", &[]).kwarg("seq", "15/I/0");
    assert_eq!(registry.expand(&cmd.input()).unwrap(), Vec::new());
}

#[test]
fn empty_registry_ignores_object() {
    let cmd = Command::new("OBJECT", &[]);
    assert!(ExpanderRegistry::new().expand(&cmd.input()).unwrap().is_empty());
}

#[test]
fn closures_can_be_registered() {
    let mut registry = ExpanderRegistry::with_defaults();
    let previous = registry.register(
        "FOCUS",
        |input: &ExpansionInput<'_>| -> Result<Vec<ActionKind>, ExpandError> {
            Ok(vec![ActionKind::ChangeFilter {
                filter: input.kwarg("filter").unwrap_or("V").to_string(),
            }])
        },
    );
    assert!(previous.is_none());

    let cmd = Command::new("FOCUS", &[]).kwarg("filter", "R");
    assert_eq!(
        registry.expand(&cmd.input()).unwrap(),
        vec![ActionKind::ChangeFilter {
            filter: "R".to_string()
        }]
    );
}

#[test]
fn register_replaces_existing_rule() {
    let mut registry = ExpanderRegistry::with_defaults();
    let previous = registry.register(
        "OBJECT",
        |_: &ExpansionInput<'_>| -> Result<Vec<ActionKind>, ExpandError> {
            Err(ExpandError::InvalidValue {
                field: "target",
                value: String::new(),
                reason: "disabled",
            })
        },
    );
    assert!(previous.is_some());
    let cmd = Command::new("OBJECT", &["x", "1", "2"]);
    assert!(registry.expand(&cmd.input()).is_err());
}

#[test]
fn debug_lists_names() {
    let registry = ExpanderRegistry::with_defaults();
    assert_eq!(format!("{registry:?}"), r#"ExpanderRegistry { names: ["OBJECT"] }"#);
}
