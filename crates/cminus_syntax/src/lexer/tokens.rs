//! Token types for the C-Minus scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use cminus_core::lang::keywords::{self, KeywordId};
use cminus_core::lang::operators::{self, OperatorId};
use cminus_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Classification of a token.
///
/// The exact source text lives in [`Token::lexeme`], so no variant carries data besides a registry ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Num,

    // ========== Special ==========
    /// A character no scanning rule accepts (or a lone `!`, or an unterminated comment).
    Error,
    Eof,
}

/// A token with its kind, lexeme, line and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

impl TokenKind {
    /// Canonical spelling for fixed-text kinds; `None` for identifiers, numbers, errors and EOF.
    pub fn fixed_text(&self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword(id) => Some(keywords::as_str(*id)),
            TokenKind::Operator(id) => Some(operators::as_str(*id)),
            TokenKind::Punctuation(id) => Some(punctuation::as_str(*id)),
            TokenKind::Ident | TokenKind::Num | TokenKind::Error | TokenKind::Eof => None,
        }
    }
}

/// Listing form of a token: `reserved word: if`, `<=`, `NUM, val= 3`, `ID, name= x`, `ERROR: @`, `EOF`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Keyword(_) => write!(f, "reserved word: {}", self.lexeme),
            TokenKind::Operator(id) => f.write_str(operators::as_str(id)),
            TokenKind::Punctuation(id) => f.write_str(punctuation::as_str(id)),
            TokenKind::Ident => write!(f, "ID, name= {}", self.lexeme),
            TokenKind::Num => write!(f, "NUM, val= {}", self.lexeme),
            TokenKind::Error => write!(f, "ERROR: {}", self.lexeme),
            TokenKind::Eof => f.write_str("EOF"),
        }
    }
}
