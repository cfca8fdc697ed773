// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Lexer and parser for the observation plan language.
//!
//! Turns plan text into an intermediate representation (IR) of nested
//! sequences and commands.
//!
//! # Quick Start
//!
//! ```ignore
//! use obsplan_grammar::Parser;
//!
//! let ir = Parser::parse(
//!     "BEGINSEQUENCE ak=6\n\
//!      OBJECT FF_Aql 18:58:14.75 17:21:39.29 seq=5/I/60,5/V/70\n\
//!      ENDSEQUENCE",
//! )?;
//! assert_eq!(ir.count_commands(), 1);
//! # Ok::<(), obsplan_grammar::SyntaxError>(())
//! ```
//!
//! # Syntax
//!
//! - `BEGINSEQUENCE [args] [key=value ...]` … `ENDSEQUENCE` blocks, nested to any depth
//! - one command per line: `NAME [args] [key=value ...]`
//! - `key=v1,v2` value lists; values may be bare or quoted (`"…"`, `'…'`)
//! - `#` comments to end of line; blank lines are ignored
//! - text that does not start with `BEGINSEQUENCE` is wrapped in an implicit sequence
//!
//! # IR Structure
//!
//! ```text
//! PlanIr
//! └── SequenceNode[]
//!     ├── args, kwargs
//!     └── children: IrNode[] (Sequence | Command)
//! ```

mod ir;
mod lexer;
mod parse_error;
mod parser;
pub mod span;
mod token;

pub use ir::{CommandNode, IrNode, IrVisitor, PlanIr, SequenceNode};
pub use lexer::{Lexer, LexerError};
pub use parse_error::SyntaxError;
pub use parser::{GrammarConfig, Parser, DEFAULT_MAX_NESTING_DEPTH};
pub use span::{diagnostic_context, locate_span, Span};
pub use token::{is_bare_word, is_reserved_keyword, Token, TokenKind, BEGIN_KEYWORD, END_KEYWORD};
