// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural errors and their locations.

use super::helpers::parse_err;
use crate::lexer::LexerError;
use crate::parse_error::SyntaxError;
use crate::token::TokenKind;

#[test]
fn missing_end_is_unclosed_sequence() {
    let input = "BEGINSEQUENCE ak=6\nOBJECT FF_Aql 18:58:14.75 17:21:39.29\n";
    let err = parse_err(input);
    assert!(matches!(err, SyntaxError::UnclosedSequence { .. }), "{err:?}");
    assert_eq!(err.line_col(input), (1, 1));
}

#[test]
fn unclosed_outer_reports_outer_begin() {
    let input = "BEGINSEQUENCE\nBEGINSEQUENCE\nZERO\nENDSEQUENCE\n";
    let err = parse_err(input);
    assert!(matches!(err, SyntaxError::UnclosedSequence { .. }));
    assert_eq!(err.line_col(input), (1, 1));
}

#[test]
fn unclosed_inner_reports_inner_begin() {
    let input = "ZERO\nBEGINSEQUENCE\nDARK\n";
    let err = parse_err(input);
    assert!(matches!(err, SyntaxError::UnclosedSequence { .. }));
    assert_eq!(err.line_col(input), (2, 1));
}

#[test]
fn end_without_begin_in_bare_text() {
    let input = "ZERO\nENDSEQUENCE";
    let err = parse_err(input);
    assert_eq!(err, SyntaxError::UnmatchedEnd { span: crate::span::Span::new(5, 16) });
}

#[test]
fn extra_end_after_sequences() {
    let input = "BEGINSEQUENCE\nZERO\nENDSEQUENCE\nENDSEQUENCE\n";
    let err = parse_err(input);
    assert!(matches!(err, SyntaxError::UnmatchedEnd { .. }));
    assert_eq!(err.line_col(input), (4, 1));
}

#[yare::parameterized(
    text_after_end        = { "BEGINSEQUENCE\nENDSEQUENCE ZERO", "newline after 'ENDSEQUENCE'" },
    begin_inside_command  = { "BEGINSEQUENCE\nZERO BEGINSEQUENCE\nENDSEQUENCE", "newline after command" },
    end_inside_command    = { "BEGINSEQUENCE\nZERO ENDSEQUENCE", "newline after command" },
    begin_after_header    = { "BEGINSEQUENCE a=1 BEGINSEQUENCE\nENDSEQUENCE", "newline after sequence header" },
    command_between_seqs  = { "BEGINSEQUENCE\nENDSEQUENCE\nZERO\n", "'BEGINSEQUENCE'" },
    quoted_command_name   = { "\"ZERO\" a=1", "command or 'BEGINSEQUENCE'" },
    line_starts_with_eq   = { "BEGINSEQUENCE\n= 1\nENDSEQUENCE", "command or 'BEGINSEQUENCE'" },
)]
fn unexpected_token(input: &str, expected_part: &str) {
    match parse_err(input) {
        SyntaxError::UnexpectedToken { expected, .. } => {
            assert!(expected.contains(expected_part), "{expected:?} vs {expected_part:?}");
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn unterminated_quote_is_lexer_error() {
    let err = parse_err("ZERO note=\"never closed\n");
    match err {
        SyntaxError::Lexer(LexerError::UnterminatedQuote { quote, .. }) => assert_eq!(quote, '"'),
        other => panic!("expected lexer error, got {other:?}"),
    }
}

#[test]
fn error_display_names_the_token() {
    let err = parse_err("ZERO a,b");
    let message = err.to_string();
    assert!(message.contains("','"), "{message}");
    assert!(message.contains("position 6"), "{message}");
}

#[test]
fn diagnostic_points_at_offending_line() {
    let input = "BEGINSEQUENCE\nOBJECT a,b 1 2\nENDSEQUENCE";
    let err = parse_err(input);
    assert!(matches!(
        err,
        SyntaxError::UnexpectedToken { found: TokenKind::Comma, .. }
    ));
    let diag = err.diagnostic(input);
    assert!(diag.contains("--> line 2, column 9"), "{diag}");
    assert!(diag.contains("  2 | OBJECT a,b 1 2"), "{diag}");
    assert!(diag.ends_with("        ^"), "{diag}");
}

#[test]
fn lexer_errors_precede_syntax_errors() {
    // The whole input is tokenized before parsing starts
    let input = "BEGINSEQUENCE\nZERO a,b\nZERO \"x\n";
    assert!(matches!(parse_err(input), SyntaxError::Lexer(_)));
}
