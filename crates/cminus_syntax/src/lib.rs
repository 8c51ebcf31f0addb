//! Syntax front end for the C-Minus language: scanner, parser, AST, diagnostics, tree dumper.
//!
//! This crate is dependency-light and intended for reuse by the compiler driver and any later phases (semantic
//! analysis, code generation) built on top of the AST.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not do name resolution or type checking.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `cminus_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use cminus_syntax::{lexer, parser, printer};
//!
//! let tokens = lexer::lex("int x;\n").unwrap();
//! assert_eq!(tokens.len(), 4);
//!
//! let output = parser::parse("int x;\n").unwrap();
//! assert_eq!(printer::dump(&output.program), "Var-Declaration\n  Int\n  Id: x\n");
//! ```
//!
//! ## See also
//! - `cminus_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token_helpers;
