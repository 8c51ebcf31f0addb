/// Parse a source string into a [`ParseOutput`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` if parsing fails; the last element is the fatal error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<ParseOutput, Vec<CompileError>> {
    parse_reader(source.as_bytes())
}

/// Parse from any buffered reader. Lines are scanned as they are read.
#[tracing::instrument(skip_all)]
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ParseOutput, Vec<CompileError>> {
    let parser = Parser::new(Scanner::new(reader)).map_err(|e| vec![e])?;
    parser.parse()
}
