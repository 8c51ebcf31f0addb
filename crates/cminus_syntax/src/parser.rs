//! Parser for the C-Minus programming language
//!
//! Recursive descent over a pulled token stream with one token of lookahead. The only error recovery point is the
//! top level: a malformed region between declarations is reported once and skipped up to the next `int`/`void`.
//! Every other syntax error is fatal.
//!
//! ## Examples
//!
//! ```rust
//! use cminus_syntax::parser;
//!
//! let source = "int x;\nvoid main(void) { x = 1; }\n";
//! let output = parser::parse(source).unwrap();
//! assert_eq!(output.program.declarations.len(), 2);
//! assert!(output.errors.is_empty());
//! ```

use std::io::BufRead;

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Scanner, Token, TokenKind};
use cminus_core::lang::keywords::KeywordId;
use cminus_core::lang::operators::{self, OperatorId, precedence};
use cminus_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
