//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with basic metadata such as precedence and category.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (all spellings are symbolic anyway).
//! - `precedence` is one of the [`precedence`] levels; higher binds tighter. The parser walks the levels from the
//!   loosest to the tightest and asks [`binary_at`] which operators belong to the level it is parsing.
//!
//! ## Examples
//! ```rust
//! use cminus_core::lang::operators::{self, OperatorId, precedence};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::binary_at(OperatorId::Minus, precedence::ADDITIVE), Some(OperatorId::Minus));
//! assert_eq!(operators::binary_at(OperatorId::Star, precedence::ADDITIVE), None);
//! ```

/// Precedence levels, loosest first.
pub mod precedence {
    pub const ASSIGNMENT: u8 = 10;
    /// Non-chaining: at most one relational operator per simple expression.
    pub const RELATIONAL: u8 = 40;
    pub const ADDITIVE: u8 = 50;
    pub const MULTIPLICATIVE: u8 = 60;
}

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Relational,
    Assignment,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Relational
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment
    Eq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", precedence::ADDITIVE, OperatorCategory::Arithmetic),
    op(OperatorId::Minus, "-", precedence::ADDITIVE, OperatorCategory::Arithmetic),
    op(OperatorId::Star, "*", precedence::MULTIPLICATIVE, OperatorCategory::Arithmetic),
    op(OperatorId::Slash, "/", precedence::MULTIPLICATIVE, OperatorCategory::Arithmetic),
    // Relational
    op(OperatorId::EqEq, "==", precedence::RELATIONAL, OperatorCategory::Relational),
    op(OperatorId::NotEq, "!=", precedence::RELATIONAL, OperatorCategory::Relational),
    op(OperatorId::Lt, "<", precedence::RELATIONAL, OperatorCategory::Relational),
    op(OperatorId::LtEq, "<=", precedence::RELATIONAL, OperatorCategory::Relational),
    op(OperatorId::Gt, ">", precedence::RELATIONAL, OperatorCategory::Relational),
    op(OperatorId::GtEq, ">=", precedence::RELATIONAL, OperatorCategory::Relational),
    // Assignment
    op(OperatorId::Eq, "=", precedence::ASSIGNMENT, OperatorCategory::Assignment),
];

/// Return the spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the category for an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return `id` if it is a binary operator at the given precedence level.
///
/// Assignment is never a binary operator here: it takes a variable, not an expression, on its left.
pub fn binary_at(id: OperatorId, level: u8) -> Option<OperatorId> {
    let info = info_for(id);
    (info.category != OperatorCategory::Assignment && info.precedence == level).then_some(id)
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    category: OperatorCategory,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        category,
    }
}
