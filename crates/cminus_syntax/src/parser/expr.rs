/// Expression parsing methods.
///
/// This chunk implements the expression grammar as a precedence ladder:
/// assignment → simple (one optional relational operator) → additive → term → factor.
///
/// ## Notes
/// - An expression that starts with an identifier is parsed as a `var` first, because only after it can the parser
///   tell an assignment target from an operand. That already-parsed `var` (the *seed*) is handed down the ladder and
///   consumed by the first `factor`.
/// - Each level picks its operators from the registry by [`precedence`] level.
impl<R: BufRead> Parser<R> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// expression → var `=` expression | simple-expression
    fn expression(&mut self) -> Result<Node<Expr>, CompileError> {
        if self.token.kind != TokenKind::Ident {
            return self.simple_expression(None);
        }

        let target = self.var()?;
        if self.check_op(OperatorId::Eq) {
            let line = self.advance()?.line;
            let value = self.expression()?;
            return Ok(Node::new(
                Expr::Assign {
                    target: Box::new(target),
                    value: Box::new(value),
                },
                line,
            ));
        }
        self.simple_expression(Some(target))
    }

    /// simple-expression → additive [ relop additive ]
    ///
    /// Relational operators do not chain: `a < b < c` stops after `a < b`.
    fn simple_expression(&mut self, seed: Option<Node<Var>>) -> Result<Node<Expr>, CompileError> {
        let left = self.additive_expression(seed)?;
        let Some(op) = self.binary_op_at(precedence::RELATIONAL) else {
            return Ok(left);
        };
        let line = self.advance()?.line;
        let right = self.additive_expression(None)?;
        Ok(Node::new(Expr::Binary(Box::new(left), op, Box::new(right)), line))
    }

    /// additive → term { (`+` | `-`) term }
    fn additive_expression(&mut self, seed: Option<Node<Var>>) -> Result<Node<Expr>, CompileError> {
        let mut left = self.term(seed)?;
        while let Some(op) = self.binary_op_at(precedence::ADDITIVE) {
            let line = self.advance()?.line;
            let right = self.term(None)?;
            left = Node::new(Expr::Binary(Box::new(left), op, Box::new(right)), line);
        }
        Ok(left)
    }

    /// term → factor { (`*` | `/`) factor }
    fn term(&mut self, seed: Option<Node<Var>>) -> Result<Node<Expr>, CompileError> {
        let mut left = self.factor(seed)?;
        while let Some(op) = self.binary_op_at(precedence::MULTIPLICATIVE) {
            let line = self.advance()?.line;
            let right = self.factor(None)?;
            left = Node::new(Expr::Binary(Box::new(left), op, Box::new(right)), line);
        }
        Ok(left)
    }

    /// factor → seed | `(` expression `)` | var [ call ] | NUM
    fn factor(&mut self, seed: Option<Node<Var>>) -> Result<Node<Expr>, CompileError> {
        if let Some(var) = seed {
            return self.var_or_call(var);
        }

        match self.token.kind {
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance()?;
                let expr = self.expression()?;
                self.expect_punct(PunctuationId::RParen)?;
                Ok(expr)
            }
            TokenKind::Ident => {
                let var = self.var()?;
                self.var_or_call(var)
            }
            TokenKind::Num => {
                let value = self.numeral()?;
                Ok(Node::new(Expr::Literal(value.node), value.line))
            }
            _ => Err(self.unexpected()),
        }
    }

    /// var → ID [ `[` expression `]` ]
    fn var(&mut self) -> Result<Node<Var>, CompileError> {
        let name = self.identifier()?;
        let line = name.line;
        if !self.match_punct(PunctuationId::LBracket)? {
            return Ok(Node::new(Var::Scalar(name.node), line));
        }
        let index = self.expression()?;
        self.expect_punct(PunctuationId::RBracket)?;
        Ok(Node::new(
            Var::Indexed {
                name,
                index: Box::new(index),
            },
            line,
        ))
    }

    /// A scalar `var` followed by `(` is a call; an indexed one never is.
    fn var_or_call(&mut self, var: Node<Var>) -> Result<Node<Expr>, CompileError> {
        if self.check_punct(PunctuationId::LParen) {
            if let Var::Scalar(name) = &var.node {
                let callee = Node::new(name.clone(), var.line);
                return self.call(callee);
            }
        }
        Ok(var.into())
    }

    /// call → `(` [ args ] `)`
    fn call(&mut self, callee: Node<Ident>) -> Result<Node<Expr>, CompileError> {
        let line = callee.line;
        self.expect_punct(PunctuationId::LParen)?;
        let args = if self.check_punct(PunctuationId::RParen) {
            Vec::new()
        } else {
            self.args()?
        };
        self.expect_punct(PunctuationId::RParen)?;
        Ok(Node::new(Expr::Call(Call { callee, args }), line))
    }

    /// args → expression { `,` expression }
    fn args(&mut self) -> Result<Vec<Node<Expr>>, CompileError> {
        let mut args = vec![self.expression()?];
        while self.match_punct(PunctuationId::Comma)? {
            args.push(self.expression()?);
        }
        Ok(args)
    }
}
