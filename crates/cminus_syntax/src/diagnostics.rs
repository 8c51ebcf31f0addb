//! Diagnostics for the C-Minus front end.
//!
//! A [`CompileError`] carries the line it was raised on (the form the listing reports) and the byte span of the
//! offending token (used by the rendered report).

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::Token;

/// Error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Io,
}

impl ErrorKind {
    /// Diagnostic code shown in rendered reports.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "cminus::syntax",
            ErrorKind::Io => "cminus::io",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "Syntax error"),
            ErrorKind::Io => write!(f, "I/O error"),
        }
    }
}

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub span: SourceSpan,
}

// Written by hand: the code depends on the error kind.
impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some("here".to_string()),
            self.span,
        ))))
    }
}

impl CompileError {
    pub fn syntax(message: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            line,
            span: span.into(),
        }
    }

    /// Syntax error pointing at `token`: `unexpected token -> <rendered token>`.
    pub fn unexpected(token: &Token) -> Self {
        Self::syntax(format!("unexpected token -> {token}"), token.line, token.span)
    }

    pub fn io(err: &std::io::Error, line: usize, offset: usize) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: err.to_string(),
            line,
            span: Span::new(offset, offset).into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }
}

/// Render an error with source context as a plain-text report.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let report = miette::Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut out, &*report).is_err() {
        // Fall back to the one-line listing form.
        out = error.to_string();
    }
    out
}
