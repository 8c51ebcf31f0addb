/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Consuming tokens (`advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Error recovery (`synchronize`)
///
/// Every helper that consumes a token can fail, because consuming pulls the next token from the reader.
impl<R: BufRead> Parser<R> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Replace the lookahead with the next scanned token and return the token we just consumed.
    fn advance(&mut self) -> Result<Token, CompileError> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.token, next))
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.token.kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.token.kind.is_punctuation(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.token.kind.is_operator(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> Result<bool, CompileError> {
        if self.check_keyword(id) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> Result<bool, CompileError> {
        if self.check_punct(id) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<Token, CompileError> {
        if self.check_keyword(id) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<Token, CompileError> {
        if self.check_punct(id) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    /// Syntax error for the current lookahead.
    fn unexpected(&self) -> CompileError {
        CompileError::unexpected(&self.token)
    }

    /// Discard tokens until one that can start a declaration (or end of input).
    fn synchronize(&mut self) -> Result<(), CompileError> {
        while !self.token.is_type_specifier() && !self.token.is_eof() {
            self.advance()?;
        }
        Ok(())
    }

    /// Return `true` if the lookahead can start a statement: `if { ID while return ; ( NUM`.
    fn is_at_statement_start(&self) -> bool {
        matches!(self.token.kind, TokenKind::Ident | TokenKind::Num)
            || self.check_keyword(KeywordId::If)
            || self.check_keyword(KeywordId::While)
            || self.check_keyword(KeywordId::Return)
            || self.check_punct(PunctuationId::LBrace)
            || self.check_punct(PunctuationId::LParen)
            || self.check_punct(PunctuationId::Semi)
    }

    /// If the lookahead is a binary operator at precedence `level`, return its binary-expression form.
    fn binary_op_at(&self, level: u8) -> Option<BinaryOp> {
        self.token
            .operator_id()
            .and_then(|id| operators::binary_at(id, level))
            .and_then(BinaryOp::from_operator)
    }
}
