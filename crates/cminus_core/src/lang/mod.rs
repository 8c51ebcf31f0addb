//! C-Minus language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the scanner, parser and tooling. Instead,
//! callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry
//! tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The scanner/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   token rendering, tree dumps).
//!
//! ## Examples
//! ```rust
//! use cminus_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::as_str(KeywordId::If), "if");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
