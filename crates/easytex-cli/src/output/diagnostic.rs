//! Miette diagnostic wrapper for EasyTeX parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use easytex::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for EasyTeX parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(easytex::parse))]
pub struct EasytexDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl EasytexDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column, message, help) = match err {
            ParseError::Syntax {
                line,
                column,
                message,
                help,
                ..
            } => (*line, *column, format!("syntax error: {message}"), help.clone()),
            ParseError::Invalid {
                line,
                column,
                source,
                ..
            } => (*line, *column, format!("invalid document: {source}"), None),
            ParseError::Text { .. } | ParseError::WrongKind { .. } => {
                (1, 1, err.to_string(), None)
            }
        };

        // Sum the full length of every line before the error line, then add
        // the column.
        let offset = content
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        EasytexDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }
}
