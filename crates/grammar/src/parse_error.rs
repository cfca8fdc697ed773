// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax errors raised while parsing plan text.

use crate::lexer::LexerError;
use crate::span::{diagnostic_context, locate_span, Span};
use crate::token::TokenKind;
use thiserror::Error;

/// Plan text does not conform to the grammar.
///
/// Parsing stops at the first error; no partial IR is produced. Every
/// variant carries a span, so [`SyntaxError::line_col`] and
/// [`SyntaxError::diagnostic`] can always point at the offending text.
///
/// # Examples
///
/// ```ignore
/// use obsplan_grammar::{Parser, SyntaxError};
///
/// let result = Parser::parse("BEGINSEQUENCE\nOBJECT x 1 2\n");
/// assert!(matches!(result, Err(SyntaxError::UnclosedSequence { .. })));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("lexer error: {0}")]
    Lexer(#[from] LexerError),

    #[error("unexpected token {found} at position {}, expected {expected}", span.start)]
    UnexpectedToken {
        found: TokenKind,
        expected: String,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    /// `ENDSEQUENCE` with no open sequence.
    #[error("'ENDSEQUENCE' at position {} has no matching 'BEGINSEQUENCE'", span.start)]
    UnmatchedEnd { span: Span },

    /// End of input reached inside a sequence; the span is its `BEGINSEQUENCE`.
    #[error("'BEGINSEQUENCE' at position {} is never closed by 'ENDSEQUENCE'", span.start)]
    UnclosedSequence { span: Span },

    #[error("malformed key=value at position {}: {message}", span.start)]
    MalformedKwarg { message: String, span: Span },

    #[error("sequence nesting depth {depth} exceeds maximum of {max}")]
    NestingTooDeep { depth: usize, max: usize, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lexer(e) => e.span(),
            SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::UnexpectedEof { span, .. }
            | SyntaxError::UnmatchedEnd { span }
            | SyntaxError::UnclosedSequence { span }
            | SyntaxError::MalformedKwarg { span, .. }
            | SyntaxError::NestingTooDeep { span, .. } => *span,
        }
    }

    /// 1-indexed `(line, column)` of the error in `input`.
    pub fn line_col(&self, input: &str) -> (usize, usize) {
        let (line, col, _) = locate_span(input, self.span());
        (line, col + 1)
    }

    /// Rich diagnostic with the offending line and a caret.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}
