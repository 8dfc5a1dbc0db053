//! Parse error types for EasyTeX.

use std::ops::Range;

use strsim::levenshtein;
use thiserror::Error;

use super::keyword::Keyword;
use crate::ir::{DocumentKind, IrError};

/// An error that occurred during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Free text contained a character outside the terminal set, or was empty.
    #[error("error parsing text '{input}': {message}")]
    Text { input: String, message: String },

    /// The document did not match the grammar.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        /// The source line the error points at.
        fragment: String,
        message: String,
        help: Option<String>,
    },

    /// The document matched the grammar but a value broke an invariant.
    #[error("invalid document at {line}:{column}: {source}")]
    Invalid {
        line: usize,
        column: usize,
        fragment: String,
        #[source]
        source: IrError,
    },

    /// A document of one kind was parsed where the other was required.
    #[error("expected a {expected} document, found {found}")]
    WrongKind {
        expected: DocumentKind,
        found: DocumentKind,
    },
}

impl ParseError {
    /// Whether this error rejects a whole document, as opposed to free text.
    pub fn is_document_error(&self) -> bool {
        !matches!(self, ParseError::Text { .. })
    }

    /// Source position of the error, if it has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Syntax { line, column, .. } | ParseError::Invalid { line, column, .. } => {
                Some((*line, *column))
            }
            ParseError::Text { .. } | ParseError::WrongKind { .. } => None,
        }
    }

    /// Build a syntax error at byte `offset` of `source`.
    pub(crate) fn syntax(source: &str, offset: usize, message: String) -> Self {
        let (line, column) = calculate_position(source, offset);
        let fragment = line_at(source, offset).to_string();
        let help = keyword_help(&fragment);
        let message = if message.is_empty() {
            "unexpected input".to_string()
        } else {
            message.replace('\n', "; ")
        };
        ParseError::Syntax {
            line,
            column,
            fragment,
            message,
            help,
        }
    }

    /// Build a construction error for the capture at `span` of `source`.
    pub(crate) fn invalid(source: &str, span: Range<usize>, error: IrError) -> Self {
        let (line, column) = calculate_position(source, span.start);
        ParseError::Invalid {
            line,
            column,
            fragment: line_at(source, span.start).to_string(),
            source: error,
        }
    }
}

/// Calculate line and column from a byte offset into the original input.
fn calculate_position(original: &str, offset: usize) -> (usize, usize) {
    let consumed = offset.min(original.len());
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// The full line of `source` containing byte `offset`, without its ending.
fn line_at(source: &str, offset: usize) -> &str {
    let offset = offset.min(source.len());
    let start = source[..offset].rfind('\n').map_or(0, |pos| pos + 1);
    let end = source[offset..]
        .find('\n')
        .map_or(source.len(), |pos| offset + pos);
    source[start..end].trim_end_matches('\r')
}

/// Suggest a keyword when the offending line starts with a near miss.
fn keyword_help(fragment: &str) -> Option<String> {
    let word = fragment
        .trim_start()
        .split(|c: char| c == ':' || c.is_whitespace())
        .next()
        .filter(|word| !word.is_empty())?;
    let known: Vec<&str> = DocumentKind::ALL
        .into_iter()
        .map(DocumentKind::as_str)
        .chain(Keyword::ALL.into_iter().map(Keyword::as_str))
        .collect();
    let suggestions = compute_suggestions(word, &known);
    let first = suggestions.first()?;
    Some(format!("did you mean '{first}:'?"))
}

/// Compute "did you mean" suggestions using Levenshtein distance.
///
/// - Max distance 1 for names of 3 characters or fewer, 2 otherwise
/// - Exact matches are not suggestions
/// - At most 3 suggestions, closest first
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
