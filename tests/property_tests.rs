//! Property-based tests for the C-Minus front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use cminus::ast::{BinaryOp, Declaration, Expr, Node, Stmt};
use cminus::lang::{keywords, operators, punctuation};
use cminus::lexer::{self, TokenKind};
use cminus::parser;
use cminus_core::MAX_TOKEN_LEN;
use proptest::prelude::*;

// =============================================================================
// Scanner Properties
// =============================================================================

#[cfg(test)]
mod scanner_tests {
    use super::*;

    fn ident_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z]{1,60}".prop_filter("Not a keyword", |s| keywords::from_str(s).is_none())
    }

    proptest! {
        /// Property: any input scans to completion, ending with exactly one EOF
        #[test]
        fn arbitrary_input_scans_to_eof(source in any::<String>()) {
            let tokens = lexer::lex(&source).expect("in-memory scanning cannot fail");
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
            for tok in &tokens {
                prop_assert!(tok.lexeme.chars().count() <= MAX_TOKEN_LEN);
            }
        }

        /// Property: token spans are ordered and never overlap
        #[test]
        fn spans_are_monotonic(source in "[ -~\n\t]{0,200}") {
            let tokens = lexer::lex(&source).unwrap();
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start || pair[1].kind == TokenKind::Eof);
                prop_assert!(pair[0].line <= pair[1].line);
            }
        }

        /// Property: identifiers survive lexing, truncated to the maximum token length
        #[test]
        fn identifiers_survive_lexing(ident in ident_strategy()) {
            let source = format!("x = {ident};");
            let tokens = lexer::lex(&source).unwrap();
            prop_assert_eq!(tokens.len(), 5);
            prop_assert_eq!(tokens[2].kind, TokenKind::Ident);
            let expected: String = ident.chars().take(MAX_TOKEN_LEN).collect();
            prop_assert_eq!(&tokens[2].lexeme, &expected);
        }

        /// Property: reserved words are matched exactly; any other casing is an identifier
        #[test]
        fn keyword_case_variants_are_identifiers(
            index in 0..keywords::KEYWORDS.len(),
            mask in any::<u8>(),
        ) {
            let canonical = keywords::KEYWORDS[index].canonical;
            let variant: String = canonical
                .chars()
                .enumerate()
                .map(|(i, c)| if mask & (1 << i) != 0 { c.to_ascii_uppercase() } else { c })
                .collect();
            let tokens = lexer::lex(&variant).unwrap();
            if variant == canonical {
                prop_assert!(tokens[0].kind.is_keyword(keywords::KEYWORDS[index].id));
            } else {
                prop_assert_eq!(tokens[0].kind, TokenKind::Ident);
            }
        }

        /// Property: the reported line is one past the number of preceding newlines
        #[test]
        fn line_numbers_count_newlines(blank_lines in 0usize..20) {
            let source = format!("{}int x;", "\n".repeat(blank_lines));
            let tokens = lexer::lex(&source).unwrap();
            prop_assert_eq!(tokens[0].line, blank_lines + 1);
        }
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

#[cfg(test)]
mod parser_tests {
    use super::*;

    /// Arithmetic expression model used to generate source and check the parsed shape.
    #[derive(Debug, Clone, PartialEq)]
    enum Arith {
        Lit(i64),
        Bin(Box<Arith>, BinaryOp, Box<Arith>),
    }

    fn arith_strategy() -> impl Strategy<Value = Arith> {
        let leaf = (0i64..1000).prop_map(Arith::Lit);
        leaf.prop_recursive(4, 32, 2, |inner| {
            let op = prop_oneof![
                Just(BinaryOp::Add),
                Just(BinaryOp::Sub),
                Just(BinaryOp::Mul),
                Just(BinaryOp::Div),
            ];
            (inner.clone(), op, inner).prop_map(|(l, op, r)| Arith::Bin(Box::new(l), op, Box::new(r)))
        })
    }

    /// Fully parenthesized rendering, so the shape is independent of precedence.
    fn render(e: &Arith) -> String {
        match e {
            Arith::Lit(v) => v.to_string(),
            Arith::Bin(l, op, r) => format!("({} {} {})", render(l), op, render(r)),
        }
    }

    fn from_ast(e: &Node<Expr>) -> Option<Arith> {
        match &e.node {
            Expr::Literal(v) => Some(Arith::Lit(*v)),
            Expr::Binary(l, op, r) => Some(Arith::Bin(Box::new(from_ast(l)?), *op, Box::new(from_ast(r)?))),
            _ => None,
        }
    }

    fn vocabulary_word() -> impl Strategy<Value = String> {
        let fixed: Vec<&'static str> = keywords::KEYWORDS
            .iter()
            .map(|k| k.canonical)
            .chain(operators::OPERATORS.iter().map(|o| o.spelling))
            .chain(punctuation::PUNCTUATION.iter().map(|p| p.canonical))
            .collect();
        prop_oneof![
            prop::sample::select(fixed).prop_map(str::to_string),
            "[a-z]{1,3}",
            "[0-9]{1,3}",
        ]
    }

    proptest! {
        /// Property: parenthesized expressions parse back to the same tree
        #[test]
        fn parenthesized_expressions_keep_their_shape(e in arith_strategy()) {
            let source = format!("void main(void) {{ {}; }}", render(&e));
            let output = parser::parse(&source).expect("generated program should parse");
            let Declaration::Function(f) = &output.program.declarations[0].node else {
                panic!("Expected function");
            };
            let Stmt::Expr(expr) = &f.body.node.statements[0].node else {
                panic!("Expected expression statement");
            };
            prop_assert_eq!(from_ast(expr), Some(e));
        }

        /// Property: the parser never panics on token soup, and fatal errors are always last
        #[test]
        fn token_soup_never_panics(words in prop::collection::vec(vocabulary_word(), 0..40)) {
            let source = words.join(" ");
            match parser::parse(&source) {
                Ok(output) => prop_assert!(!output.program.declarations.is_empty()),
                Err(errs) => {
                    prop_assert!(!errs.is_empty());
                    prop_assert!(errs.iter().all(|e| e.is_syntax()));
                }
            }
        }
    }
}
