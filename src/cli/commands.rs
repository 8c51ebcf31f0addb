//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use cminus_syntax::diagnostics::{self, CompileError};
use cminus_syntax::{lexer, parser, printer};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, refusing files over [`MAX_SOURCE_SIZE`].
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let bytes = fs::read(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))?;
    tracing::debug!(file = file_path, bytes = bytes.len(), "read source");
    // The scanner treats input bytes as characters; invalid UTF-8 is replaced rather than rejected.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render diagnostics with source context, one report per error.
pub fn render_errors(file_path: &str, source: &str, errors: &[CompileError]) -> String {
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&diagnostics::format_error(file_path, source, err));
    }
    msg.trim_end().to_string()
}

/// Token listing: one `<line>: <token>` row per token, ending with `EOF`.
pub fn token_listing(source: &str) -> Result<String, CompileError> {
    let tokens = lexer::lex(source)?;
    let mut out = String::new();
    for tok in &tokens {
        out.push_str(&format!("{}: {}\n", tok.line, tok));
    }
    Ok(out)
}

/// Tokenize and print the token listing.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let listing = token_listing(&source)
        .map_err(|err| CliError::failure(render_errors(file_path, &source, std::slice::from_ref(&err))))?;
    print!("{listing}");
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the raw AST.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    match parser::parse(&source) {
        Ok(output) => {
            println!("{:#?}", output.program);
            report_recovered(file_path, &source, &output.errors)
        }
        Err(errs) => Err(CliError::failure(render_errors(file_path, &source, &errs))),
    }
}

/// Parse a file and print its syntax tree.
///
/// The tree is printed even when top-level errors were recovered from; the exit status still reports them.
pub fn compile_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    match parser::parse(&source) {
        Ok(output) => {
            println!("Syntax tree:");
            print!("{}", printer::dump(&output.program));
            report_recovered(file_path, &source, &output.errors)
        }
        Err(errs) => Err(CliError::failure(render_errors(file_path, &source, &errs))),
    }
}

fn report_recovered(file_path: &str, source: &str, errors: &[CompileError]) -> CliResult<ExitCode> {
    if errors.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }
    eprintln!("{}", render_errors(file_path, source, errors));
    Ok(ExitCode::FAILURE)
}
