#![forbid(unsafe_code)]
//! C-Minus compiler front end
//!
//! Scans and parses C-Minus source into an abstract syntax tree. The syntax crates do the work; this crate adds the
//! command-line driver and re-exports them under one roof.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups (`info_for`) panic on a missing table entry, which is a programming error.

pub mod cli;

pub use cminus_core::lang;
pub use cminus_syntax::ast;
pub use cminus_syntax::diagnostics;
pub use cminus_syntax::lexer;
pub use cminus_syntax::parser;
pub use cminus_syntax::printer;
