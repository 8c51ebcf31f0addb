//! CLI module for the C-Minus compiler front end
//!
//! ## Usage
//!
//! - `cminus <file>` - Parse and print the syntax tree
//! - `cminus --lex <file>` - Print the token listing (debug)
//! - `cminus --parse <file>` - Print the raw AST (debug)
//!
//! `--trace-scan` and `--echo-source` turn on the scanner's trace events (one per token, one per source line).
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target of the per-token scanner trace.
const SCAN_TRACE_DIRECTIVE: &str = "cminus_syntax::lexer::scan=trace";
/// Target of the raw source-line echo.
const SOURCE_ECHO_DIRECTIVE: &str = "cminus_syntax::lexer::source=trace";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for the C-Minus language
#[derive(Parser, Debug)]
#[command(name = "cminus")]
#[command(version = VERSION)]
#[command(about = "Scan and parse C-Minus programs", long_about = None)]
pub struct Cli {
    /// File to parse (prints the syntax tree)
    #[arg(value_name = "FILE", required_unless_present_any = ["lex_file", "parse_file"])]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with_all = ["file", "parse_file"])]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the raw AST (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Trace every scanned token as `<line>: <token>`
    #[arg(long)]
    pub trace_scan: bool,

    /// Echo each source line as it is read
    #[arg(long)]
    pub echo_source: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(&cli);

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }

    match cli.file {
        Some(file) => commands::compile_file(&file.to_string_lossy()),
        // clap enforces a file; keep a clear message for programmatic callers.
        None => Err(CliError::failure("Error: no input file")),
    }
}

/// Initialize structured logging: `RUST_LOG` (default `info`) plus the scanner debug toggles.
///
/// Events go to stderr so the listings on stdout stay clean.
fn init_tracing(cli: &Cli) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(cli))
        .with_writer(std::io::stderr)
        .try_init();
}

fn env_filter(cli: &Cli) -> EnvFilter {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let toggles = [
        (cli.trace_scan, SCAN_TRACE_DIRECTIVE),
        (cli.echo_source, SOURCE_ECHO_DIRECTIVE),
    ];
    for (enabled, directive) in toggles {
        if !enabled {
            continue;
        }
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("warning: ignoring trace directive '{directive}': {e}"),
        }
    }
    filter
}

// ============================================================================
// Tests
// ============================================================================
