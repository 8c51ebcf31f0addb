/// Statement parsing methods.
///
/// This chunk parses compound statements and the statement forms (`if`, `while`, `return`, expression statements).
///
/// ## Notes
/// - The empty statement `;` yields `None`: it is dropped from statement lists and leaves an `if`/`while` body empty.
impl<R: BufRead> Parser<R> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// compound → `{` local-declarations statement-list `}`
    fn compound(&mut self) -> Result<Node<CompoundStmt>, CompileError> {
        let line = self.token.line;
        self.expect_punct(PunctuationId::LBrace)?;
        let locals = self.local_declarations()?;
        let statements = self.statement_list()?;
        self.expect_punct(PunctuationId::RBrace)?;
        Ok(Node::new(CompoundStmt { locals, statements }, line))
    }

    fn statement_list(&mut self) -> Result<Vec<Node<Stmt>>, CompileError> {
        let mut stmts = Vec::new();
        while self.is_at_statement_start() {
            if let Some(stmt) = self.statement()? {
                stmts.push(stmt);
            }
        }
        Ok(stmts)
    }

    fn statement(&mut self) -> Result<Option<Node<Stmt>>, CompileError> {
        let line = self.token.line;

        let stmt = if self.check_keyword(KeywordId::If) {
            self.selection_stmt()?
        } else if self.check_keyword(KeywordId::While) {
            self.iteration_stmt()?
        } else if self.check_keyword(KeywordId::Return) {
            self.return_stmt()?
        } else if self.check_punct(PunctuationId::LBrace) {
            let block = self.compound()?;
            return Ok(Some(Node::new(Stmt::Compound(block.node), block.line)));
        } else if self.match_punct(PunctuationId::Semi)? {
            return Ok(None);
        } else if matches!(self.token.kind, TokenKind::Ident | TokenKind::Num)
            || self.check_punct(PunctuationId::LParen)
        {
            let expr = self.expression()?;
            self.expect_punct(PunctuationId::Semi)?;
            Stmt::Expr(expr)
        } else {
            return Err(self.unexpected());
        };

        Ok(Some(Node::new(stmt, line)))
    }

    /// `if` `(` expression `)` statement [ `else` statement ]
    ///
    /// A dangling `else` binds to the nearest `if`.
    fn selection_stmt(&mut self) -> Result<Stmt, CompileError> {
        self.expect_keyword(KeywordId::If)?;
        self.expect_punct(PunctuationId::LParen)?;
        let cond = self.expression()?;
        self.expect_punct(PunctuationId::RParen)?;
        let then_branch = self.statement()?.map(Box::new);
        let else_branch = if self.match_keyword(KeywordId::Else)? {
            self.statement()?.map(Box::new)
        } else {
            None
        };
        Ok(Stmt::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// `while` `(` expression `)` statement
    fn iteration_stmt(&mut self) -> Result<Stmt, CompileError> {
        self.expect_keyword(KeywordId::While)?;
        self.expect_punct(PunctuationId::LParen)?;
        let cond = self.expression()?;
        self.expect_punct(PunctuationId::RParen)?;
        let body = self.statement()?.map(Box::new);
        Ok(Stmt::While { cond, body })
    }

    /// `return` [ expression ] `;`
    fn return_stmt(&mut self) -> Result<Stmt, CompileError> {
        self.expect_keyword(KeywordId::Return)?;
        if self.match_punct(PunctuationId::Semi)? {
            return Ok(Stmt::Return(None));
        }
        let value = self.expression()?;
        self.expect_punct(PunctuationId::Semi)?;
        Ok(Stmt::Return(Some(value)))
    }
}
