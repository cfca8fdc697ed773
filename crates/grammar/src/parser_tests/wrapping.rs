// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Implicit top-level sequence and grammar configuration.

use super::helpers::{as_command, as_sequence, parse_ok};
use crate::parse_error::SyntaxError;
use crate::parser::{GrammarConfig, Parser, DEFAULT_MAX_NESTING_DEPTH};

fn nested(levels: usize) -> String {
    let mut text = "BEGINSEQUENCE\n".repeat(levels);
    text.push_str("ZERO\n");
    text.push_str(&"ENDSEQUENCE\n".repeat(levels));
    text
}

#[test]
fn bare_commands_are_wrapped_in_one_sequence() {
    let ir = parse_ok("ZERO seq=15/I/0\nDARK seq=10/V/300\n");
    assert_eq!(ir.sequences.len(), 1);

    let seq = &ir.sequences[0];
    assert!(seq.args.is_empty());
    assert!(seq.kwargs.is_empty());
    assert_eq!(seq.children.len(), 2);
    assert_eq!(as_command(&seq.children[1]).name, "DARK");
}

#[test]
fn bare_text_may_contain_sequences() {
    let ir = parse_ok(
        "ZERO\n\
         BEGINSEQUENCE focus=+30\n\
         OBJECT V496_Aql 19:08:20.77 -07:26:15.89\n\
         ENDSEQUENCE\n\
         DARK\n",
    );
    assert_eq!(ir.sequences.len(), 1);
    let children = &ir.sequences[0].children;
    assert_eq!(children.len(), 3);
    assert_eq!(as_sequence(&children[1]).children.len(), 1);
    assert_eq!(ir.max_depth(), 2);
}

#[test]
fn leading_comments_do_not_force_wrapping() {
    let input = "# header\n\nBEGINSEQUENCE ak=6\nZERO\nENDSEQUENCE\n";
    let ir = parse_ok(input);
    assert_eq!(ir.sequences.len(), 1);
    assert!(ir.sequences[0].span.slice(input).starts_with("BEGINSEQUENCE ak=6"));
    assert_eq!(ir.max_depth(), 1);
}

#[test]
fn implicit_sequence_span_covers_body() {
    let input = "\nZERO\nDARK a=1\n";
    let ir = parse_ok(input);
    assert_eq!(ir.sequences[0].span.slice(input), "ZERO\nDARK a=1");
}

#[test]
fn wrapping_can_be_disabled() {
    let config = GrammarConfig {
        wrap_bare: false,
        ..GrammarConfig::default()
    };
    let err = Parser::parse_with_config("ZERO\n", &config).unwrap_err();
    assert!(matches!(err, SyntaxError::UnexpectedToken { .. }), "{err:?}");

    let ir = Parser::parse_with_config("BEGINSEQUENCE\nZERO\nENDSEQUENCE", &config).unwrap();
    assert_eq!(ir.count_commands(), 1);
}

#[test]
fn default_config_is_capped_and_wrapping() {
    let config = GrammarConfig::default();
    assert_eq!(config.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    assert!(config.wrap_bare);
    assert_eq!(parse_ok(&nested(40)).max_depth(), 40);
}

#[test]
fn default_cap_allows_its_own_depth() {
    let ir = parse_ok(&nested(DEFAULT_MAX_NESTING_DEPTH));
    assert_eq!(ir.max_depth(), DEFAULT_MAX_NESTING_DEPTH);
}

#[test]
fn nesting_far_past_default_cap_is_a_syntax_error() {
    let input = nested(1000);
    let err = Parser::parse(&input).unwrap_err();
    assert_eq!(err.line_col(&input), (DEFAULT_MAX_NESTING_DEPTH + 1, 1));
    match err {
        SyntaxError::NestingTooDeep { depth, max, .. } => {
            assert_eq!(depth, DEFAULT_MAX_NESTING_DEPTH + 1);
            assert_eq!(max, DEFAULT_MAX_NESTING_DEPTH);
        }
        other => panic!("expected NestingTooDeep, got {other:?}"),
    }
}

#[test]
fn zero_removes_the_cap() {
    let config = GrammarConfig {
        max_nesting_depth: 0,
        ..GrammarConfig::default()
    };
    let levels = DEFAULT_MAX_NESTING_DEPTH + 10;
    let ir = Parser::parse_with_config(&nested(levels), &config).unwrap();
    assert_eq!(ir.max_depth(), levels);
}

#[yare::parameterized(
    at_limit    = { 3, 3, true },
    below_limit = { 2, 3, true },
    over_limit  = { 4, 3, false },
    limit_one   = { 1, 1, true },
)]
fn nesting_limit(levels: usize, max: usize, ok: bool) {
    let config = GrammarConfig {
        max_nesting_depth: max,
        ..GrammarConfig::default()
    };
    let result = Parser::parse_with_config(&nested(levels), &config);
    if ok {
        assert_eq!(result.unwrap().max_depth(), levels);
    } else {
        match result.unwrap_err() {
            SyntaxError::NestingTooDeep { depth, max: limit, .. } => {
                assert_eq!(depth, max + 1);
                assert_eq!(limit, max);
            }
            other => panic!("expected NestingTooDeep, got {other:?}"),
        }
    }
}

#[test]
fn implicit_sequence_counts_toward_depth() {
    let config = GrammarConfig {
        max_nesting_depth: 1,
        ..GrammarConfig::default()
    };
    let err = Parser::parse_with_config("ZERO\nBEGINSEQUENCE\nDARK\nENDSEQUENCE\n", &config)
        .unwrap_err();
    assert!(matches!(err, SyntaxError::NestingTooDeep { depth: 2, max: 1, .. }));
}
