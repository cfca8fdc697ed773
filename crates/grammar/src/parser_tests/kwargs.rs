// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Positional arguments and `key=value` pairs.

use super::helpers::{kwarg, parse_err, single_command};
use crate::parse_error::SyntaxError;
use crate::token::TokenKind;
use obsplan_core::join_values;
use proptest::prelude::*;

#[test]
fn value_list_is_joined_with_commas() {
    let cmd = single_command("OBJECT x 1 2 seq=5/I/60,5/V/70,1/R/5");
    assert_eq!(kwarg(&cmd, "seq"), Some("5/I/60,5/V/70,1/R/5"));
}

#[test]
fn quoted_values_keep_spaces() {
    let cmd = single_command(r#"OBJECT "FF Aql" 1 2 note='slow readout'"#);
    assert_eq!(cmd.args[0], "FF Aql");
    assert_eq!(kwarg(&cmd, "note"), Some("slow readout"));
}

#[test]
fn quoted_value_in_list() {
    let cmd = single_command(r#"ZERO tags="a b",c"#);
    assert_eq!(kwarg(&cmd, "tags"), Some("a b,c"));
}

#[test]
fn quoted_positional_may_hold_a_comma() {
    let cmd = single_command(r#"OBJECT "a,b" 1 2"#);
    assert_eq!(cmd.args[0], "a,b");
}

#[test]
fn args_and_kwargs_may_interleave() {
    let cmd = single_command("OBJECT x a=1 y b=2 z");
    assert_eq!(cmd.args, vec!["x", "y", "z"]);
    assert_eq!(cmd.kwargs.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn repeated_key_keeps_first_position_last_value() {
    let cmd = single_command("ZERO a=1 b=2 a=3");
    assert_eq!(cmd.kwargs.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(kwarg(&cmd, "a"), Some("3"));
}

#[test]
fn signed_and_sexagesimal_words() {
    let cmd = single_command("OBJECT V496_Aql 19:08:20.77 -07:26:15.89 focus=+30");
    assert_eq!(cmd.args[2], "-07:26:15.89");
    assert_eq!(kwarg(&cmd, "focus"), Some("+30"));
}

#[test]
fn empty_quoted_value_is_allowed() {
    let cmd = single_command(r#"ZERO note="""#);
    assert_eq!(kwarg(&cmd, "note"), Some(""));
}

#[yare::parameterized(
    space_before_equals = { "ZERO seq =1",      "whitespace between" },
    space_after_equals  = { "ZERO seq= 1",      "missing value" },
    trailing_equals     = { "ZERO seq=",        "missing value" },
    space_after_comma   = { "ZERO seq=1, 2",    "empty value in list" },
    double_comma        = { "ZERO seq=1,,2",    "empty value in list" },
    trailing_comma      = { "ZERO seq=1,",      "empty value in list" },
    missing_key         = { "ZERO =1",          "missing key" },
    quoted_key          = { r#"ZERO "seq"=1"#,  "quoted string" },
    second_equals       = { "ZERO a=b=c",       "unexpected '='" },
    quoted_comma        = { r#"ZERO note="a,b""#,   "contains ','" },
    quoted_comma_list   = { r#"ZERO note="a,b",c"#, "contains ','" },
)]
fn malformed_kwarg(input: &str, message_part: &str) {
    match parse_err(input) {
        SyntaxError::MalformedKwarg { message, .. } => {
            assert!(
                message.contains(message_part),
                "{message:?} should mention {message_part:?}"
            );
        }
        other => panic!("expected MalformedKwarg, got {other:?}"),
    }
}

#[yare::parameterized(
    comma_after_arg   = { "ZERO a,b",     TokenKind::Comma },
    lone_comma        = { "ZERO a , b",   TokenKind::Comma },
    glued_quote       = { r#"ZERO a=1"x""#, TokenKind::Quoted("x".to_string()) },
    glued_after_quote = { r#"ZERO "a"b"#, TokenKind::Word("b".to_string()) },
)]
fn unexpected_token_in_arguments(input: &str, expected_found: TokenKind) {
    match parse_err(input) {
        SyntaxError::UnexpectedToken { found, .. } => assert_eq!(found, expected_found),
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn malformed_kwarg_span_starts_at_key() {
    let input = "ZERO seq= 1";
    let err = parse_err(input);
    assert_eq!(err.span().start, 5);
    assert_eq!(err.line_col(input), (1, 6));
}

proptest! {
    #[test]
    fn kwarg_values_survive_parsing(
        key in "[a-z_]{1,6}",
        values in prop::collection::vec("[A-Za-z0-9/+:.-]{1,8}", 1..4),
    ) {
        let joined = join_values(&values);
        let cmd = single_command(&format!("ZERO {}={}", key, joined));
        prop_assert_eq!(kwarg(&cmd, &key), Some(joined.as_str()));
        prop_assert!(cmd.args.is_empty());
    }
}
