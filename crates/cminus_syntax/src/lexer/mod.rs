//! Scanner for the C-Minus programming language
//!
//! Handles tokenization including:
//! - Reserved words and identifiers (letters only)
//! - Unsigned integer literals
//! - One- and two-character operators (`=`/`==`, `!=`, `<`/`<=`, `>`/`>=`)
//! - Punctuation and `/* ... */` comments
//!
//! Tokens are pulled one at a time with [`Scanner::next_token`]; source text is read a line at a time from any
//! [`BufRead`], so the whole input never has to be in memory.
//!
//! ## Tracing
//!
//! - target `cminus_syntax::lexer::scan`: one `<line>: <token>` trace event per token
//! - target `cminus_syntax::lexer::source`: each source line as it is read
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use std::io::BufRead;

use crate::ast::Span;
use crate::diagnostics::CompileError;
use cminus_core::MAX_TOKEN_LEN;
use cminus_core::lang::operators::{self, OperatorId};
use cminus_core::lang::punctuation;

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// DFA (simplified):
//
//            digit → InNum ──non-digit (unread)──→ Done(NUM)
//           letter → InId ──non-letter (unread)──→ Done(ID / keyword)
//  [Start]   = ! < > → InEq/InNotEq/InLess/InGreater ──'='──→ Done(two-char op)
//                                                   └─other (unread)─→ Done(one-char op / ERROR)
//              '/' → InSlash ──'*'──→ InComment ⇄ EndComment ──'/'──→ [Start]
//                            └─other (unread)─→ Done(/)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InNum,
    InId,
    InEq,
    InNotEq,
    InLess,
    InGreater,
    InSlash,
    InComment,
    EndComment,
    Done,
}

/// Pull-based scanner over a line-buffered reader.
///
/// The only lookahead is a single-character pushback ([`Scanner::unread`]) inside the current line buffer.
pub struct Scanner<R> {
    reader: R,
    /// Characters of the line being scanned.
    line_buf: Vec<char>,
    line_pos: usize,
    /// Byte offset of the cursor in the whole input.
    offset: usize,
    /// Number of physical lines read so far.
    line: usize,
    at_eof: bool,
}

impl<R: BufRead> Scanner<R> {
    /// Create a new scanner reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buf: Vec::new(),
            line_pos: 0,
            offset: 0,
            line: 0,
            at_eof: false,
        }
    }

    /// Current line number (the number of lines read so far).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Return the next token. After end of input every call returns an `Eof` token.
    ///
    /// ## Errors
    /// Only I/O failures of the underlying reader are errors; unrecognized characters become
    /// [`TokenKind::Error`] tokens.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        let mut lexeme = String::new();
        let mut stored = 0usize;
        let mut state = State::Start;
        let mut kind = TokenKind::Error;
        let mut start = self.offset;

        while state != State::Done {
            if state == State::Start {
                start = self.offset;
            }
            let c = self.read_char()?;
            let mut save = true;

            match state {
                State::Start => match c {
                    None => {
                        save = false;
                        state = State::Done;
                        kind = TokenKind::Eof;
                    }
                    Some(c) if c.is_ascii_digit() => state = State::InNum,
                    Some(c) if c.is_ascii_alphabetic() => state = State::InId,
                    Some('=') => state = State::InEq,
                    Some('!') => state = State::InNotEq,
                    Some('<') => state = State::InLess,
                    Some('>') => state = State::InGreater,
                    Some('/') => state = State::InSlash,
                    Some(' ' | '\t' | '\n' | '\r') => save = false,
                    Some(c) => {
                        state = State::Done;
                        kind = single_char_kind(c);
                    }
                },

                State::InNum => {
                    if !c.is_some_and(|c| c.is_ascii_digit()) {
                        self.unread(c);
                        save = false;
                        state = State::Done;
                        kind = TokenKind::Num;
                    }
                }

                State::InId => {
                    if !c.is_some_and(|c| c.is_ascii_alphabetic()) {
                        self.unread(c);
                        save = false;
                        state = State::Done;
                        kind = TokenKind::Ident;
                    }
                }

                State::InEq | State::InNotEq | State::InLess | State::InGreater => {
                    let (single, double) = match state {
                        State::InEq => (TokenKind::Operator(OperatorId::Eq), OperatorId::EqEq),
                        // A lone `!` is not an operator.
                        State::InNotEq => (TokenKind::Error, OperatorId::NotEq),
                        State::InLess => (TokenKind::Operator(OperatorId::Lt), OperatorId::LtEq),
                        _ => (TokenKind::Operator(OperatorId::Gt), OperatorId::GtEq),
                    };
                    state = State::Done;
                    if c == Some('=') {
                        kind = TokenKind::Operator(double);
                    } else {
                        self.unread(c);
                        save = false;
                        kind = single;
                    }
                }

                State::InSlash => {
                    if c == Some('*') {
                        save = false;
                        lexeme.clear();
                        stored = 0;
                        state = State::InComment;
                    } else {
                        self.unread(c);
                        save = false;
                        state = State::Done;
                        kind = TokenKind::Operator(OperatorId::Slash);
                    }
                }

                State::InComment | State::EndComment => {
                    save = false;
                    state = match (state, c) {
                        (_, None) => {
                            // Unterminated comment: report it instead of silently swallowing the rest.
                            lexeme.push_str("/*");
                            kind = TokenKind::Error;
                            State::Done
                        }
                        (_, Some('*')) => State::EndComment,
                        (State::EndComment, Some('/')) => State::Start,
                        _ => State::InComment,
                    };
                }

                State::Done => unreachable!("scanner loop exits on Done"),
            }

            if let Some(c) = c.filter(|_| save) {
                if stored < MAX_TOKEN_LEN {
                    lexeme.push(c);
                    stored += 1;
                }
            }
        }

        if kind == TokenKind::Ident {
            if let Some(id) = keyword_id(&lexeme) {
                kind = TokenKind::Keyword(id);
            }
        }

        let line = if kind == TokenKind::Eof { self.line.max(1) } else { self.line };
        let token = Token::new(kind, lexeme, line, Span::new(start, self.offset));
        tracing::trace!(target: "cminus_syntax::lexer::scan", "{}: {}", token.line, token);
        Ok(token)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Fetch the next character, reading a new line when the buffer is exhausted.
    fn read_char(&mut self) -> Result<Option<char>, CompileError> {
        if self.line_pos >= self.line_buf.len() && !self.fill_line()? {
            return Ok(None);
        }
        let c = self.line_buf[self.line_pos];
        self.line_pos += 1;
        self.offset += c.len_utf8();
        Ok(Some(c))
    }

    /// Push `c` (the character just read) back. A no-op at end of input.
    fn unread(&mut self, c: Option<char>) {
        if self.at_eof {
            return;
        }
        if let Some(c) = c {
            self.line_pos -= 1;
            self.offset -= c.len_utf8();
        }
    }

    /// Read the next physical line into the buffer. Returns `false` at end of input.
    fn fill_line(&mut self) -> Result<bool, CompileError> {
        if self.at_eof {
            return Ok(false);
        }
        let mut raw = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut raw)
            .map_err(|e| CompileError::io(&e, self.line, self.offset))?;
        if read == 0 {
            self.at_eof = true;
            return Ok(false);
        }

        self.line += 1;
        let text = String::from_utf8_lossy(&raw);
        tracing::trace!(
            target: "cminus_syntax::lexer::source",
            "{:4}: {}",
            self.line,
            text.trim_end_matches(['\n', '\r'])
        );
        self.line_buf = text.chars().collect();
        self.line_pos = 0;
        Ok(true)
    }
}

impl<'a> Scanner<&'a [u8]> {
    /// Create a scanner over an in-memory source string.
    pub fn from_source(source: &'a str) -> Self {
        Scanner::new(source.as_bytes())
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Classify a character that completes a token on its own in the start state.
fn single_char_kind(c: char) -> TokenKind {
    let mut buf = [0u8; 4];
    if let Some(id) = operators::from_str(c.encode_utf8(&mut buf)) {
        TokenKind::Operator(id)
    } else if let Some(id) = punctuation::from_char(c) {
        TokenKind::Punctuation(id)
    } else {
        TokenKind::Error
    }
}

/// Convenience function to scan a whole source string.
///
/// The returned vector always ends with the `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut scanner = Scanner::from_source(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cminus_core::lang::keywords::KeywordId;
    use cminus_core::lang::punctuation::PunctuationId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        use cminus_core::lang::keywords;

        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical).unwrap();
            assert_eq!(tokens.len(), 2, "expected token + EOF for {:?}, got {:?}", k.id, tokens);
            assert!(tokens[0].kind.is_keyword(k.id));
            assert_eq!(tokens[0].kind.fixed_text(), Some(k.canonical));
            assert_eq!(tokens[0].to_string(), format!("reserved word: {}", k.canonical));
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        use cminus_core::lang::operators;

        for o in operators::OPERATORS {
            let tokens = lex(o.spelling).unwrap();
            assert_eq!(tokens.len(), 2, "expected token + EOF for {:?}, got {:?}", o.spelling, tokens);
            assert!(tokens[0].kind.is_operator(o.id));
            assert_eq!(tokens[0].lexeme, o.spelling);
            assert_eq!(tokens[0].to_string(), o.spelling);
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let tokens = lex(p.canonical).unwrap();
            assert_eq!(tokens.len(), 2, "expected token + EOF for {:?}, got {:?}", p.canonical, tokens);
            assert!(tokens[0].kind.is_punctuation(p.id));
            assert_eq!(tokens[0].to_string(), p.canonical);
        }
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = lex("if else int return void while main If").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Keyword(KeywordId::If));
        assert_eq!(tokens[1].kind, TokenKind::Keyword(KeywordId::Else));
        assert_eq!(tokens[2].kind, TokenKind::Keyword(KeywordId::Int));
        assert_eq!(tokens[3].kind, TokenKind::Keyword(KeywordId::Return));
        assert_eq!(tokens[4].kind, TokenKind::Keyword(KeywordId::Void));
        assert_eq!(tokens[5].kind, TokenKind::Keyword(KeywordId::While));
        assert_eq!(tokens[6].kind, TokenKind::Ident);
        assert_eq!(tokens[6].lexeme, "main");
        // Lookup is case-sensitive.
        assert_eq!(tokens[7].kind, TokenKind::Ident);
    }

    #[test]
    fn test_less_equal_is_one_token() {
        assert_eq!(
            kinds("<="),
            vec![TokenKind::Operator(OperatorId::LtEq), TokenKind::Eof]
        );
        let tokens = lex("<x").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Operator(OperatorId::Lt));
        assert_eq!(tokens[0].lexeme, "<");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].lexeme, "x");
    }

    #[test]
    fn test_two_char_operators_fall_back() {
        assert_eq!(
            kinds("= == != > >= < <="),
            vec![
                TokenKind::Operator(OperatorId::Eq),
                TokenKind::Operator(OperatorId::EqEq),
                TokenKind::Operator(OperatorId::NotEq),
                TokenKind::Operator(OperatorId::Gt),
                TokenKind::Operator(OperatorId::GtEq),
                TokenKind::Operator(OperatorId::Lt),
                TokenKind::Operator(OperatorId::LtEq),
                TokenKind::Eof,
            ]
        );
        // `a=b` must not swallow the `b`.
        let tokens = lex("a=b").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Operator(OperatorId::Eq));
        assert_eq!(tokens[2].lexeme, "b");
    }

    #[test]
    fn test_lone_bang_is_error_token() {
        let tokens = lex("!x").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].lexeme, "!");
        assert_eq!(tokens[0].to_string(), "ERROR: !");
        assert_eq!(tokens[1].lexeme, "x");
    }

    #[test]
    fn test_unknown_character_is_error_token() {
        let tokens = lex("a @ b").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].lexeme, "@");
        assert_eq!(tokens[2].kind, TokenKind::Ident);
    }

    #[test]
    fn test_numbers_stop_at_non_digit() {
        let tokens = lex("123abc 7").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Num);
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[1].kind, TokenKind::Ident);
        assert_eq!(tokens[1].lexeme, "abc");
        assert_eq!(tokens[2].to_string(), "NUM, val= 7");
    }

    #[test]
    fn test_identifiers_are_letters_only() {
        let tokens = lex("ab12").unwrap();
        assert_eq!(tokens[0].lexeme, "ab");
        assert_eq!(tokens[1].kind, TokenKind::Num);
        let tokens = lex("a_b").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Error);
    }

    #[test]
    fn test_division_versus_comment() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Ident,
                TokenKind::Operator(OperatorId::Slash),
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
        let tokens = lex("a/*x*/b").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].lexeme, "a");
        assert_eq!(tokens[1].lexeme, "b");
    }

    #[test]
    fn test_multiline_comment_advances_line() {
        let tokens = lex("/* spans\nmultiple\nlines */ x").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "x");
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn test_comment_closed_by_star_run() {
        let tokens = lex("/* a **/ b").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].lexeme, "b");
    }

    #[test]
    fn test_unterminated_comment_is_error() {
        let tokens = lex("x /* never closed\n").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].lexeme, "/*");
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_line_numbers() {
        let tokens = lex("int\nx\n\n;\n").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 4);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
        assert_eq!(tokens[3].line, 4);
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut scanner = Scanner::from_source("x");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Ident);
        for _ in 0..3 {
            let token = scanner.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.lexeme, "");
            assert_eq!(token.to_string(), "EOF");
        }
    }

    #[test]
    fn test_lexeme_truncated_at_max_len() {
        let long = "a".repeat(MAX_TOKEN_LEN + 10);
        let tokens = lex(&format!("{long} b")).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].lexeme.len(), MAX_TOKEN_LEN);
        // The rest of the run is consumed, not turned into another token.
        assert_eq!(tokens[1].lexeme, "b");
        assert_eq!(tokens[0].span, Span::new(0, MAX_TOKEN_LEN + 10));
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = lex("int x;\nx <= 10;").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 3));
        assert_eq!(tokens[1].span, Span::new(4, 5));
        assert_eq!(tokens[2].span, Span::new(5, 6));
        assert_eq!(tokens[3].span, Span::new(7, 8));
        assert_eq!(tokens[4].span, Span::new(9, 11));
        assert_eq!(tokens[5].span, Span::new(12, 14));
    }

    #[test]
    fn test_whitespace_including_carriage_return() {
        let tokens = lex("int\r\n\tx ;\r\n").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].kind, TokenKind::Punctuation(PunctuationId::Semi));
    }
}
