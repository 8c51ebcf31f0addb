// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type, its top-level `parse()` loop and the [`ParseOutput`] it produces.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.

/// Result of a successful parse.
///
/// `errors` holds the diagnostics for malformed top-level regions the parser recovered from. A program with
/// recovered errors is still returned so callers can inspect (or dump) what was understood.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<CompileError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser holds exactly one token (the lookahead) and pulls the next one from the scanner on demand.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<R> {
    scanner: Scanner<R>,
    token: Token,
    errors: Vec<CompileError>,
}

impl<R: BufRead> Parser<R> {
    /// Create a parser and prime the lookahead with the first token.
    ///
    /// ## Errors
    /// Fails only if reading the first line of input fails.
    pub fn new(mut scanner: Scanner<R>) -> Result<Self, CompileError> {
        let token = scanner.next_token()?;
        Ok(Self {
            scanner,
            token,
            errors: Vec::new(),
        })
    }

    /// Parse the whole input into a [`Program`].
    ///
    /// ## Errors
    /// Returns every diagnostic collected so far, ending with the fatal one, if parsing cannot complete. Recovered
    /// top-level errors alone do not fail the parse; they are reported through [`ParseOutput::errors`].
    pub fn parse(mut self) -> Result<ParseOutput, Vec<CompileError>> {
        match self.declaration_list() {
            Ok(program) => {
                tracing::debug!(
                    declarations = program.declarations.len(),
                    recovered = self.errors.len(),
                    "parse finished"
                );
                Ok(ParseOutput {
                    program,
                    errors: self.errors,
                })
            }
            Err(fatal) => {
                self.errors.push(fatal);
                Err(self.errors)
            }
        }
    }

    /// program → { resync | declaration } `Eof`
    fn declaration_list(&mut self) -> Result<Program, CompileError> {
        let mut declarations = Vec::new();

        loop {
            if self.token.is_type_specifier() {
                declarations.push(self.declaration()?);
                continue;
            }
            if self.token.is_eof() {
                break;
            }

            // One diagnostic per malformed region, pinned to the token that opens it.
            let opener = self.token.clone();
            self.synchronize()?;
            if self.token.is_eof() {
                let unexpected = CompileError::unexpected(&opener);
                return Err(CompileError::syntax(
                    format!("expected end of file, {}", unexpected.message),
                    opener.line,
                    opener.span,
                ));
            }
            let err = CompileError::unexpected(&opener);
            tracing::warn!(%err, "skipped malformed declaration region");
            self.errors.push(err);
        }

        if declarations.is_empty() {
            return Err(self.unexpected());
        }
        Ok(Program { declarations })
    }
}
