/// Declaration parsing methods.
///
/// This chunk parses top-level declarations (variables, arrays, functions), formal parameter lists and the local
/// declarations at the head of a compound statement.
impl<R: BufRead> Parser<R> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// declaration → type-spec ID ( `(` params `)` compound | `[` NUM `]` `;` | `;` )
    fn declaration(&mut self) -> Result<Node<Declaration>, CompileError> {
        let line = self.token.line;
        let ty = self.type_spec()?;
        let name = self.identifier()?;

        let decl = if self.match_punct(PunctuationId::LParen)? {
            let params = self.params()?;
            self.expect_punct(PunctuationId::RParen)?;
            let body = self.compound()?;
            Declaration::Function(FunctionDecl {
                return_ty: ty,
                name,
                params,
                body,
            })
        } else if self.match_punct(PunctuationId::LBracket)? {
            let size = self.numeral()?;
            self.expect_punct(PunctuationId::RBracket)?;
            self.expect_punct(PunctuationId::Semi)?;
            Declaration::Array(ArrayDecl { ty, name, size })
        } else {
            self.expect_punct(PunctuationId::Semi)?;
            Declaration::Var(VarDecl { ty, name })
        };

        Ok(Node::new(decl, line))
    }

    /// params → `void` (followed by `)`) | param { `,` param }
    ///
    /// A leading `void` that is *not* followed by `)` is the type of the first parameter (`void x`). Every parameter
    /// after a comma must be `int`.
    fn params(&mut self) -> Result<Node<Params>, CompileError> {
        let line = self.token.line;
        if !self.token.is_type_specifier() {
            return Err(self.unexpected());
        }

        let first_ty = self.type_spec()?;
        if first_ty.node == TypeSpec::Void && self.check_punct(PunctuationId::RParen) {
            return Ok(Node::new(Params::Void, line));
        }

        let mut params = vec![self.param(first_ty)?];
        while self.match_punct(PunctuationId::Comma)? {
            if !self.check_keyword(KeywordId::Int) {
                return Err(self.unexpected());
            }
            let ty = self.type_spec()?;
            params.push(self.param(ty)?);
        }
        Ok(Node::new(Params::List(params), line))
    }

    /// param → ID [ `[` `]` ], after its type specifier has been consumed.
    fn param(&mut self, ty: Node<TypeSpec>) -> Result<Node<Param>, CompileError> {
        let line = ty.line;
        let name = self.identifier()?;
        let is_array = if self.match_punct(PunctuationId::LBracket)? {
            self.expect_punct(PunctuationId::RBracket)?;
            true
        } else {
            false
        };
        Ok(Node::new(Param { ty, name, is_array }, line))
    }

    /// local-declarations → { type-spec ID [ `[` [NUM] `]` ] `;` }
    ///
    /// The bound of a local array is accepted but not recorded.
    fn local_declarations(&mut self) -> Result<Vec<Node<LocalDecl>>, CompileError> {
        let mut locals = Vec::new();
        while self.token.is_type_specifier() {
            let line = self.token.line;
            let ty = self.type_spec()?;
            let name = self.identifier()?;
            let is_array = if self.match_punct(PunctuationId::LBracket)? {
                if self.token.kind == TokenKind::Num {
                    self.advance()?;
                }
                self.expect_punct(PunctuationId::RBracket)?;
                true
            } else {
                false
            };
            self.expect_punct(PunctuationId::Semi)?;
            locals.push(Node::new(LocalDecl { ty, name, is_array }, line));
        }
        Ok(locals)
    }
}
