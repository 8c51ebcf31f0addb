//! Canonical language vocabulary for the C-Minus compiler front end.
//!
//! This crate is intentionally small and dependency-free. It holds the reserved-word table and the fixed spellings of
//! every operator and punctuation token, so the scanner, the parser, the token renderer and the tree dumper all agree
//! on a single source of truth.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no compiler-specific types.

pub mod lang;

/// Maximum number of characters stored in a token lexeme.
///
/// Characters past this limit are still consumed by the scanner; they are simply not recorded.
pub const MAX_TOKEN_LEN: usize = 40;
