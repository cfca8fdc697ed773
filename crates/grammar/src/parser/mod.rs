// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser that turns plan tokens into the IR.
//!
//! Grammar:
//!
//! ```text
//! plan      := sep* (sequence sep*)*            when the text starts with BEGINSEQUENCE
//!            | items                            otherwise (implicit enclosing sequence)
//! sequence  := BEGINSEQUENCE arguments line_end items ENDSEQUENCE line_end
//! items     := (sep* (sequence | command))* sep*
//! command   := WORD arguments line_end
//! arguments := (value | WORD '=' values)*
//! values    := value (',' value)*
//! value     := WORD | QUOTED
//! line_end  := NEWLINE | EOF
//! ```
//!
//! `key=value` pairs must be written without whitespace around `=` and `,`;
//! the parser checks token adjacency through spans.

mod arguments;

use crate::ir::{CommandNode, IrNode, PlanIr, SequenceNode};
use crate::lexer::Lexer;
use crate::parse_error::SyntaxError;
use crate::span::Span;
use crate::token::{Token, TokenKind, BEGIN_KEYWORD};
use serde::{Deserialize, Serialize};

/// Default cap on sequence nesting.
///
/// Parsing and building recurse once per level, so an uncapped depth lets
/// hostile input exhaust the stack.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Grammar options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrammarConfig {
    /// Maximum allowed sequence nesting depth.
    ///
    /// 0 removes the cap; the caller then owns the stack budget.
    pub max_nesting_depth: usize,
    /// Wrap text that does not start with `BEGINSEQUENCE` in an implicit sequence.
    pub wrap_bare: bool,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            wrap_bare: true,
        }
    }
}

/// Plan parser.
///
/// # Examples
///
/// ```ignore
/// use obsplan_grammar::Parser;
///
/// let ir = Parser::parse("BEGINSEQUENCE ak=6\nOBJECT FF_Aql 18:58:14.75 17:21:39.29\nENDSEQUENCE")?;
/// assert_eq!(ir.sequences.len(), 1);
/// assert_eq!(ir.count_commands(), 1);
///
/// // Bare command lines are wrapped in one implicit sequence
/// let ir = Parser::parse("ZERO seq=15/I/0\nDARK seq=10/V/300")?;
/// assert_eq!(ir.sequences.len(), 1);
/// assert_eq!(ir.sequences[0].children.len(), 2);
/// # Ok::<(), obsplan_grammar::SyntaxError>(())
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    input_len: usize,
    config: GrammarConfig,
    depth: usize,
}

impl Parser {
    /// Parse plan text with the default configuration.
    pub fn parse(input: &str) -> Result<PlanIr, SyntaxError> {
        Self::parse_with_config(input, &GrammarConfig::default())
    }

    /// Parse plan text with custom configuration.
    pub fn parse_with_config(input: &str, config: &GrammarConfig) -> Result<PlanIr, SyntaxError> {
        let tokens = Lexer::tokenize(input)?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            input_len: input.len(),
            config: *config,
            depth: 0,
        };
        parser.parse_plan()
    }

    fn parse_plan(&mut self) -> Result<PlanIr, SyntaxError> {
        self.skip_separators();
        let start = self.current_span_start();

        if self.at_end() {
            return Ok(PlanIr {
                sequences: Vec::new(),
                span: Span::empty(start),
            });
        }

        if !matches!(self.peek_kind(), Some(TokenKind::BeginSequence)) {
            if !self.config.wrap_bare {
                return Err(self.unexpected_token(&format!("'{}'", BEGIN_KEYWORD)));
            }
            let sequence = self.parse_implicit_sequence()?;
            let span = sequence.span;
            return Ok(PlanIr {
                sequences: vec![sequence],
                span,
            });
        }

        let mut sequences = Vec::new();
        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::BeginSequence => sequences.push(self.parse_sequence()?),
                TokenKind::EndSequence => {
                    return Err(SyntaxError::UnmatchedEnd {
                        span: self.tokens[self.pos].span,
                    })
                }
                _ => return Err(self.unexpected_token(&format!("'{}'", BEGIN_KEYWORD))),
            }
            self.skip_separators();
        }

        let end = sequences.last().map(|s| s.span.end).unwrap_or(start);
        Ok(PlanIr {
            sequences,
            span: Span::new(start, end),
        })
    }

    /// Parse bare text as the body of a sequence with no header.
    fn parse_implicit_sequence(&mut self) -> Result<SequenceNode, SyntaxError> {
        let start = self.current_span_start();
        self.enter(Span::empty(start))?;
        let children = self.parse_items(None)?;
        self.depth -= 1;

        let end = children.last().map(|c| c.span().end).unwrap_or(start);
        Ok(SequenceNode {
            args: Vec::new(),
            kwargs: Default::default(),
            children,
            span: Span::new(start, end),
        })
    }

    /// Parse `BEGINSEQUENCE header NEWLINE items ENDSEQUENCE`.
    /// The caller has verified the current token is `BEGINSEQUENCE`.
    fn parse_sequence(&mut self) -> Result<SequenceNode, SyntaxError> {
        let begin = self.tokens[self.pos].span;
        self.pos += 1;
        self.enter(begin)?;

        let (args, kwargs) = self.parse_arguments()?;
        self.expect_line_end("newline after sequence header")?;
        let children = self.parse_items(Some(begin))?;

        // parse_items only returns for an open sequence when it sees ENDSEQUENCE
        let end = self.tokens[self.pos].span;
        self.pos += 1;
        self.expect_line_end("newline after 'ENDSEQUENCE'")?;
        self.depth -= 1;

        Ok(SequenceNode {
            args,
            kwargs,
            children,
            span: begin.merge(end),
        })
    }

    /// Parse sequence items until `ENDSEQUENCE` (not consumed) or end of input.
    ///
    /// `open` is the span of the enclosing `BEGINSEQUENCE`, or `None` for the
    /// implicit top-level sequence.
    fn parse_items(&mut self, open: Option<Span>) -> Result<Vec<IrNode>, SyntaxError> {
        let mut items = Vec::new();
        loop {
            self.skip_separators();
            match (self.peek_kind(), open) {
                (None, Some(span)) => return Err(SyntaxError::UnclosedSequence { span }),
                (None, None) => return Ok(items),
                (Some(TokenKind::EndSequence), Some(_)) => return Ok(items),
                (Some(TokenKind::EndSequence), None) => {
                    return Err(SyntaxError::UnmatchedEnd {
                        span: self.tokens[self.pos].span,
                    })
                }
                (Some(TokenKind::BeginSequence), _) => {
                    items.push(IrNode::Sequence(self.parse_sequence()?));
                }
                (Some(TokenKind::Word(_)), _) => {
                    items.push(IrNode::Command(self.parse_command()?));
                }
                (Some(_), _) => {
                    return Err(
                        self.unexpected_token(&format!("command or '{}'", BEGIN_KEYWORD))
                    )
                }
            }
        }
    }

    /// Parse `WORD arguments line_end`.
    fn parse_command(&mut self) -> Result<CommandNode, SyntaxError> {
        let (name, start) = match self.peek().cloned() {
            Some(Token {
                kind: TokenKind::Word(name),
                span,
            }) => (name, span),
            _ => return Err(self.unexpected_token("command name")),
        };
        self.advance();

        let (args, kwargs) = self.parse_arguments()?;
        let end = self.current_span_end();
        self.expect_line_end("newline after command")?;

        Ok(CommandNode {
            name,
            args,
            kwargs,
            span: Span::new(start.start, end.max(start.end)),
        })
    }

    /// Track one more level of nesting, enforcing the configured maximum.
    fn enter(&mut self, span: Span) -> Result<(), SyntaxError> {
        self.depth += 1;
        let max = self.config.max_nesting_depth;
        if max > 0 && self.depth > max {
            return Err(SyntaxError::NestingTooDeep {
                depth: self.depth,
                max,
                span,
            });
        }
        Ok(())
    }

    /// Consume a newline, or accept end of input.
    fn expect_line_end(&mut self, expected: &str) -> Result<(), SyntaxError> {
        match self.peek_kind() {
            None => Ok(()),
            Some(TokenKind::Newline) => {
                self.advance();
                Ok(())
            }
            Some(_) => Err(self.unexpected_token(expected)),
        }
    }

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    /// Token after the current one.
    #[inline]
    fn peek_next(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    #[inline]
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek_kind(), Some(TokenKind::Newline)) {
            self.advance();
        }
    }

    fn current_span_start(&self) -> usize {
        self.peek().map(|t| t.span.start).unwrap_or(self.input_len)
    }

    /// End of the last consumed token.
    fn current_span_end(&self) -> usize {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span.end
        } else {
            0
        }
    }

    fn unexpected_token(&self, expected: &str) -> SyntaxError {
        match self.peek() {
            Some(token) => SyntaxError::UnexpectedToken {
                found: token.kind.clone(),
                expected: expected.to_string(),
                span: token.span,
            },
            None => SyntaxError::UnexpectedEof {
                expected: expected.to_string(),
                span: Span::empty(self.input_len),
            },
        }
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
