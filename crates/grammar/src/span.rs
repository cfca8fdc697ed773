// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for plan text.

use serde::{Deserialize, Serialize};

/// A byte range in the plan text.
///
/// Spans use byte offsets, so slicing the source is cheap and UTF-8 safe as
/// long as the span came from the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// An empty span at `pos`, used for end-of-input positions.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extract the spanned text, or `""` when out of bounds.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Locate a span in source, returning `(line, column, line_content)`.
///
/// Line numbers are 1-indexed; the column is a 0-indexed character count
/// from the start of the line. A trailing `\r` is stripped from the line.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let start = span.start.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, ch) in source.char_indices() {
        if i >= start {
            break;
        }
        if ch == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let col = source
        .get(line_start..start)
        .map(|s| s.chars().count())
        .unwrap_or(0);

    let line_content = source[line_start..line_end].trim_end_matches('\r');
    (line_num, col, line_content)
}

/// Render a rustc-style diagnostic for `span`.
///
/// ```text
/// error: unexpected token ',' at position 23, expected argument or newline
///   --> line 2, column 9
///    |
///  2 | OBJECT a,b 18:58:14.75 17:21:39.29
///    |         ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    let caret_len = span.len().max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(caret_len)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
