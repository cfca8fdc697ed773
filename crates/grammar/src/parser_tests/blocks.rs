// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequence blocks, nesting, comments and line endings.

use super::helpers::{as_command, as_sequence, parse_ok};
use proptest::prelude::*;

#[test]
fn single_sequence_with_one_object() {
    let ir = parse_ok(
        "BEGINSEQUENCE ak=6\n\
         OBJECT FF_Aql 18:58:14.75 17:21:39.29 seq=5/I/60,5/V/70\n\
         ENDSEQUENCE",
    );
    assert_eq!(ir.sequences.len(), 1);

    let seq = &ir.sequences[0];
    assert!(seq.args.is_empty());
    assert_eq!(seq.kwargs.get("ak").map(String::as_str), Some("6"));
    assert_eq!(seq.children.len(), 1);

    let cmd = as_command(&seq.children[0]);
    assert_eq!(cmd.name, "OBJECT");
    assert_eq!(cmd.args, vec!["FF_Aql", "18:58:14.75", "17:21:39.29"]);
    assert_eq!(cmd.kwargs.get("seq").map(String::as_str), Some("5/I/60,5/V/70"));
}

#[test]
fn nested_sequence_keeps_child_order() {
    let ir = parse_ok(
        "BEGINSEQUENCE ak=6\n\
         OBJECT FF_Aql 18:58:14.75 17:21:39.29 seq=1/V/10\n\
         BEGINSEQUENCE focus=+30\n\
         OBJECT V496_Aql 19:08:20.77 -07:26:15.89 seq=1/V/20\n\
         ENDSEQUENCE\n\
         ZERO seq=15/I/0\n\
         ENDSEQUENCE\n",
    );
    let outer = &ir.sequences[0];
    assert_eq!(outer.children.len(), 3);
    assert_eq!(as_command(&outer.children[0]).args[0], "FF_Aql");

    let inner = as_sequence(&outer.children[1]);
    assert_eq!(inner.kwargs.get("focus").map(String::as_str), Some("+30"));
    let nested = as_command(&inner.children[0]);
    assert_eq!(nested.args, vec!["V496_Aql", "19:08:20.77", "-07:26:15.89"]);

    assert_eq!(as_command(&outer.children[2]).name, "ZERO");
}

#[test]
fn several_top_level_sequences_in_order() {
    let ir = parse_ok(
        "BEGINSEQUENCE first=1\nZERO\nENDSEQUENCE\n\
         \n\
         BEGINSEQUENCE second=2\nDARK\nENDSEQUENCE\n",
    );
    assert_eq!(ir.sequences.len(), 2);
    assert!(ir.sequences[0].kwargs.contains_key("first"));
    assert!(ir.sequences[1].kwargs.contains_key("second"));
}

#[test]
fn sequence_header_takes_positional_args() {
    let ir = parse_ok("BEGINSEQUENCE repeat 3 ak=6\nZERO\nENDSEQUENCE");
    assert_eq!(ir.sequences[0].args, vec!["repeat", "3"]);
    assert_eq!(ir.sequences[0].kwargs.len(), 1);
}

#[test]
fn empty_sequence() {
    let ir = parse_ok("BEGINSEQUENCE\nENDSEQUENCE\n");
    assert_eq!(ir.sequences.len(), 1);
    assert!(ir.sequences[0].children.is_empty());
}

#[yare::parameterized(
    empty         = { "" },
    blank_lines   = { "\n\n   \n" },
    only_comments = { "# nothing tonight\n  # still nothing\n" },
)]
fn no_content_gives_no_sequences(input: &str) {
    assert!(parse_ok(input).sequences.is_empty());
}

#[test]
fn comments_are_ignored_everywhere() {
    let ir = parse_ok(
        "# plan for tonight\n\
         BEGINSEQUENCE ak=6 # header comment\n\
         \x20   # whole-line comment\n\
         ZERO seq=15/I/0 # trailing\n\
         ENDSEQUENCE # done\n",
    );
    let seq = &ir.sequences[0];
    assert_eq!(seq.kwargs.len(), 1);
    assert_eq!(seq.children.len(), 1);
    assert_eq!(as_command(&seq.children[0]).args, Vec::<String>::new());
}

#[test]
fn crlf_line_endings() {
    let ir = parse_ok("BEGINSEQUENCE ak=6\r\nZERO seq=15/I/0\r\nENDSEQUENCE\r\n");
    let cmd = as_command(&ir.sequences[0].children[0]);
    assert_eq!(cmd.kwargs.get("seq").map(String::as_str), Some("15/I/0"));
}

#[test]
fn indentation_is_insignificant() {
    let flat = parse_ok("BEGINSEQUENCE\nZERO a=1\nENDSEQUENCE");
    let indented = parse_ok("  BEGINSEQUENCE\n\t\tZERO   a=1\n  ENDSEQUENCE  ");
    assert_eq!(flat.sequences[0].children.len(), 1);
    assert_eq!(
        as_command(&flat.sequences[0].children[0]).kwargs,
        as_command(&indented.sequences[0].children[0]).kwargs
    );
}

#[test]
fn spans_cover_source_text() {
    let input = "BEGINSEQUENCE\nZERO seq=15/I/0\nENDSEQUENCE\n";
    let ir = parse_ok(input);
    let seq = &ir.sequences[0];
    assert_eq!(seq.span.slice(input), "BEGINSEQUENCE\nZERO seq=15/I/0\nENDSEQUENCE");
    assert_eq!(seq.children[0].span().slice(input), "ZERO seq=15/I/0");
}

#[test]
fn keywords_are_case_sensitive() {
    // Lowercase is an ordinary command, wrapped in the implicit sequence
    let ir = parse_ok("beginsequence\nendsequence");
    assert_eq!(ir.sequences.len(), 1);
    assert_eq!(as_command(&ir.sequences[0].children[0]).name, "beginsequence");
    assert_eq!(as_command(&ir.sequences[0].children[1]).name, "endsequence");
}

proptest! {
    #[test]
    fn nesting_shape_is_preserved(depths in prop::collection::vec(0usize..4, 1..6)) {
        let mut text = String::from("BEGINSEQUENCE\n");
        for &depth in &depths {
            text.push_str(&"BEGINSEQUENCE\n".repeat(depth));
            text.push_str("ZERO seq=1/V/0\n");
            text.push_str(&"ENDSEQUENCE\n".repeat(depth));
        }
        text.push_str("ENDSEQUENCE\n");

        let ir = parse_ok(&text);
        prop_assert_eq!(ir.count_commands(), depths.len());
        prop_assert_eq!(ir.count_sequences(), 1 + depths.iter().sum::<usize>());
        prop_assert_eq!(ir.max_depth(), 1 + depths.iter().copied().max().unwrap_or(0));
    }
}
