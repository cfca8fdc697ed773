// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument parsing: positional tokens and `key=value[,value...]` pairs.

use super::Parser;
use crate::parse_error::SyntaxError;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use obsplan_core::{join_values, Kwargs, LIST_SEPARATOR};

impl Parser {
    /// Check if the next token starts exactly at `end` (no whitespace gap).
    #[inline]
    fn is_adjacent(&self, end: usize) -> bool {
        self.peek().map(|t| t.span.start == end).unwrap_or(false)
    }

    /// Parse positional arguments and keyword arguments up to the end of line.
    ///
    /// Stops without consuming at a newline, a block keyword, or end of input.
    /// A repeated key keeps its first position and takes the last value.
    pub(super) fn parse_arguments(&mut self) -> Result<(Vec<String>, Kwargs), SyntaxError> {
        let mut args = Vec::new();
        let mut kwargs = Kwargs::new();

        while let Some(token) = self.peek().cloned() {
            match token.kind {
                TokenKind::Word(word) => {
                    let is_kwarg = matches!(
                        self.peek_next(),
                        Some(Token { kind: TokenKind::Equals, .. })
                    );
                    if is_kwarg {
                        let (key, value) = self.parse_kwarg(word, token.span)?;
                        kwargs.insert(key, value);
                    } else {
                        self.advance();
                        self.reject_adjacent(token.span.end)?;
                        args.push(word);
                    }
                }
                TokenKind::Quoted(text) => {
                    self.advance();
                    if matches!(self.peek_kind(), Some(TokenKind::Equals)) {
                        return Err(SyntaxError::MalformedKwarg {
                            message: "key must be a bare word, not a quoted string".to_string(),
                            span: token.span,
                        });
                    }
                    self.reject_adjacent(token.span.end)?;
                    args.push(text);
                }
                TokenKind::Equals => {
                    return Err(SyntaxError::MalformedKwarg {
                        message: "missing key before '='".to_string(),
                        span: token.span,
                    });
                }
                TokenKind::Comma => return Err(self.unexpected_token("argument or newline")),
                TokenKind::Newline | TokenKind::BeginSequence | TokenKind::EndSequence => break,
            }
        }

        Ok((args, kwargs))
    }

    /// Parse `key=value[,value...]`; the current token is the key and the
    /// next one is `=`.
    ///
    /// Values are stored comma-joined, so quoting cannot protect a comma: a
    /// quoted value containing one is refused rather than silently split.
    fn parse_kwarg(&mut self, key: String, key_span: Span) -> Result<(String, String), SyntaxError> {
        self.advance();
        if !self.is_adjacent(key_span.end) {
            return Err(SyntaxError::MalformedKwarg {
                message: format!("whitespace between '{}' and '='", key),
                span: key_span,
            });
        }
        // peek_next() confirmed the '=' token
        let eq_span = self.tokens[self.pos].span;
        self.advance();

        let mut values = Vec::new();
        let mut end = eq_span.end;
        loop {
            let value = match self.peek().cloned() {
                Some(Token {
                    kind: TokenKind::Quoted(v),
                    span,
                }) if span.start == end && v.contains(LIST_SEPARATOR) => {
                    return Err(SyntaxError::MalformedKwarg {
                        message: format!(
                            "quoted value of '{}' contains '{}', which always separates list values",
                            key, LIST_SEPARATOR
                        ),
                        span,
                    });
                }
                Some(Token {
                    kind: TokenKind::Word(v) | TokenKind::Quoted(v),
                    span,
                }) if span.start == end => {
                    end = span.end;
                    v
                }
                _ => {
                    let message = if values.is_empty() {
                        format!("missing value for '{}'", key)
                    } else {
                        format!("empty value in list for '{}'", key)
                    };
                    return Err(SyntaxError::MalformedKwarg {
                        message,
                        span: Span::new(key_span.start, end),
                    });
                }
            };
            self.advance();
            values.push(value);

            match self.peek() {
                Some(Token {
                    kind: TokenKind::Comma,
                    span,
                }) if span.start == end => {
                    end = span.end;
                    self.advance();
                }
                Some(Token {
                    kind: TokenKind::Equals,
                    span,
                }) if span.start == end => {
                    return Err(SyntaxError::MalformedKwarg {
                        message: format!("unexpected '=' in value of '{}'", key),
                        span: *span,
                    });
                }
                _ => break,
            }
        }

        self.reject_adjacent(end)?;
        Ok((key, join_values(&values)))
    }

    /// Arguments must be separated by whitespace.
    fn reject_adjacent(&self, end: usize) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(token) if token.span.start == end && token.kind != TokenKind::Newline => {
                Err(self.unexpected_token("whitespace between arguments"))
            }
            _ => Ok(()),
        }
    }
}
