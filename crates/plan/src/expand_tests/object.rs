// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::Command;
use crate::expand::{CommandExpander, ExpandError, ObjectExpander};
use obsplan_core::ActionKind;

fn slew(ra: &str, dec: &str) -> ActionKind {
    ActionKind::MountSlewCooSync {
        ra: ra.to_string(),
        dec: dec.to_string(),
    }
}

fn filter(name: &str) -> ActionKind {
    ActionKind::ChangeFilter {
        filter: name.to_string(),
    }
}

fn exposure(count: u32, exposure_time: f64) -> ActionKind {
    ActionKind::CameraExposure {
        count,
        exposure_time,
    }
}

#[test]
fn named_target_with_two_groups() {
    let cmd = Command::new("OBJECT", &["FF_Aql", "18:58:14.75", "17:21:39.29"])
        .kwarg("seq", "5/I/60,5/V/70");
    let actions = ObjectExpander.expand(&cmd.input()).unwrap();
    assert_eq!(
        actions,
        vec![
            slew("18:58:14.75", "17:21:39.29"),
            ActionKind::DomeSlaveTelescope,
            filter("I"),
            exposure(5, 60.0),
            filter("V"),
            exposure(5, 70.0),
        ]
    );
}

#[test]
fn two_args_are_ra_dec() {
    let cmd = Command::new("OBJECT", &["20:23:35.8", "-21:22:14.0"]);
    let actions = ObjectExpander.expand(&cmd.input()).unwrap();
    assert_eq!(
        actions,
        vec![slew("20:23:35.8", "-21:22:14.0"), ActionKind::DomeSlaveTelescope]
    );
}

#[test]
fn extra_args_after_dec_are_ignored() {
    let cmd = Command::new("OBJECT", &["NG31", "12:12:12", "20:20:20", "extra"]);
    let actions = ObjectExpander.expand(&cmd.input()).unwrap();
    assert_eq!(actions[0], slew("12:12:12", "20:20:20"));
    assert_eq!(actions.len(), 2);
}

#[yare::parameterized(
    no_args  = { &[] },
    one_arg  = { &["FF_Aql"] },
)]
fn too_few_args_is_arity_error(args: &[&str]) {
    let cmd = Command::new("OBJECT", args).kwarg("seq", "1/V/20");
    match ObjectExpander.expand(&cmd.input()).unwrap_err() {
        ExpandError::Arity { what, found, .. } => {
            assert_eq!(found, args.len());
            assert!(what.contains("OBJECT"));
        }
        other => panic!("expected Arity, got {other:?}"),
    }
}

#[test]
fn bad_seq_fails_the_whole_command() {
    let cmd = Command::new("OBJECT", &["x", "1", "2"]).kwarg("seq", "1/V/20,5/I");
    assert!(matches!(
        ObjectExpander.expand(&cmd.input()),
        Err(ExpandError::Arity { found: 2, .. })
    ));
}

#[test]
fn other_kwargs_do_not_add_actions() {
    let cmd = Command::new("OBJECT", &["x", "1", "2"])
        .kwarg("ak", "6")
        .kwarg("focus", "+30");
    assert_eq!(ObjectExpander.expand(&cmd.input()).unwrap().len(), 2);
}
