/// Miscellaneous parser utilities.
///
/// Leaf-level helpers shared by the declaration, statement and expression chunks: type specifiers, identifiers and
/// integer literals.
impl<R: BufRead> Parser<R> {
    // ========================================================================
    // Utilities
    // ========================================================================

    /// `int` | `void`
    fn type_spec(&mut self) -> Result<Node<TypeSpec>, CompileError> {
        let spec = match self.token.keyword_id() {
            Some(KeywordId::Int) => TypeSpec::Int,
            Some(KeywordId::Void) => TypeSpec::Void,
            _ => return Err(self.unexpected()),
        };
        let token = self.advance()?;
        Ok(Node::new(spec, token.line))
    }

    fn identifier(&mut self) -> Result<Node<Ident>, CompileError> {
        if self.token.kind != TokenKind::Ident {
            return Err(self.unexpected());
        }
        let token = self.advance()?;
        Ok(Node::new(token.lexeme, token.line))
    }

    /// Integer literal. Values that do not fit in an `i64` are rejected.
    fn numeral(&mut self) -> Result<Node<i64>, CompileError> {
        if self.token.kind != TokenKind::Num {
            return Err(self.unexpected());
        }
        let value = self.token.lexeme.parse::<i64>().map_err(|_| {
            CompileError::syntax(
                format!("integer literal out of range -> {}", self.token),
                self.token.line,
                self.token.span,
            )
        })?;
        let token = self.advance()?;
        Ok(Node::new(value, token.line))
    }
}
