// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plan text lexer.
//!
//! Splits the input into words, quoted strings, `=`, `,`, block keywords and
//! newlines. Horizontal whitespace and `#` comments are dropped; the parser
//! relies on spans to tell adjacent tokens (`key=value`) from separated ones.

use crate::span::Span;
use crate::token::{is_word_delimiter, Token, TokenKind, BEGIN_KEYWORD, END_KEYWORD};
use std::iter::Peekable;
use std::str::CharIndices;
use thiserror::Error;

/// Errors raised while tokenizing plan text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// A quoted string ran into a newline or the end of input.
    #[error("unterminated {quote} quote at position {}", span.start)]
    UnterminatedQuote { quote: char, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedQuote { span, .. } => *span,
        }
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Tokenize the whole input.
    pub fn tokenize(input: &'a str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer {
            input,
            chars: input.char_indices().peekable(),
            tokens: Vec::new(),
        };
        lexer.run()?;
        Ok(lexer.tokens)
    }

    fn run(&mut self) -> Result<(), LexerError> {
        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                '\n' => {
                    self.chars.next();
                    self.push(TokenKind::Newline, pos, pos + 1);
                }
                '#' => self.skip_comment(),
                '=' => {
                    self.chars.next();
                    self.push(TokenKind::Equals, pos, pos + 1);
                }
                ',' => {
                    self.chars.next();
                    self.push(TokenKind::Comma, pos, pos + 1);
                }
                '"' | '\'' => self.read_quoted(pos, ch)?,
                c if c.is_whitespace() => {
                    self.chars.next();
                }
                _ => self.read_word(pos),
            }
        }
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, end)));
    }

    /// Skip from `#` up to, not including, the newline.
    fn skip_comment(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch == '\n' {
                break;
            }
            self.chars.next();
        }
    }

    fn read_quoted(&mut self, start: usize, quote: char) -> Result<(), LexerError> {
        self.chars.next();
        let content_start = start + quote.len_utf8();

        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch == '\n' {
                break;
            }
            self.chars.next();
            if ch == quote {
                let content = self.input[content_start..pos].to_string();
                self.push(TokenKind::Quoted(content), start, pos + ch.len_utf8());
                return Ok(());
            }
        }

        let end = self
            .chars
            .peek()
            .map(|&(pos, _)| pos)
            .unwrap_or(self.input.len());
        Err(LexerError::UnterminatedQuote {
            quote,
            span: Span::new(start, end),
        })
    }

    fn read_word(&mut self, start: usize) {
        let mut end = start;
        while let Some(&(pos, ch)) = self.chars.peek() {
            if is_word_delimiter(ch) {
                break;
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }

        let word = &self.input[start..end];
        let kind = match word {
            BEGIN_KEYWORD => TokenKind::BeginSequence,
            END_KEYWORD => TokenKind::EndSequence,
            _ => TokenKind::Word(word.to_string()),
        };
        self.push(kind, start, end);
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
