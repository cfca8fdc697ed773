// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the plan lexer.

use crate::span::Span;
use std::fmt;

/// Reserved keyword that opens a sequence block.
pub const BEGIN_KEYWORD: &str = "BEGINSEQUENCE";

/// Reserved keyword that closes a sequence block.
pub const END_KEYWORD: &str = "ENDSEQUENCE";

/// Whether `word` is one of the reserved block keywords.
pub fn is_reserved_keyword(word: &str) -> bool {
    word == BEGIN_KEYWORD || word == END_KEYWORD
}

/// Characters that terminate a bare word.
pub(crate) fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '=' | ',' | '"' | '\'' | '#')
}

/// Whether `word` could be written as a bare token.
pub fn is_bare_word(word: &str) -> bool {
    !word.is_empty() && !word.chars().any(is_word_delimiter)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare word: command name, positional argument, key, or value.
    Word(String),
    /// Quoted string with the quotes removed.
    Quoted(String),
    /// `=` between a key and its value.
    Equals,
    /// `,` between values of one key.
    Comma,
    /// The `BEGINSEQUENCE` keyword.
    BeginSequence,
    /// The `ENDSEQUENCE` keyword.
    EndSequence,
    /// Line separator.
    Newline,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(w) => write!(f, "'{}'", w),
            TokenKind::Quoted(s) => write!(f, "quoted string \"{}\"", s),
            TokenKind::Equals => write!(f, "'='"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::BeginSequence => write!(f, "'{}'", BEGIN_KEYWORD),
            TokenKind::EndSequence => write!(f, "'{}'", END_KEYWORD),
            TokenKind::Newline => write!(f, "newline"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
