//! Document parsing entry points.

use tracing::debug;
use winnow::prelude::*;
use winnow::stream::LocatingSlice;

use super::build::build_document;
use super::error::ParseError;
use super::grammar::document;
use super::raw::RawDocument;
use crate::ir::{Document, DocumentKind, Memorandum, ProblemSet};

/// Parse an EasyTeX document into its validated IR.
///
/// Either the whole input yields one document or one error is returned;
/// there are no partial results.
///
/// # Example
///
/// ```
/// use easytex::parse_document;
///
/// let source = "problem_set:\n    author: Jane Doe\n    problem:\n        statement:\n            What is 2+2?\n        solution:\n            It is 4.\n";
/// let document = parse_document(source).unwrap();
/// let set = document.as_problem_set().unwrap();
/// assert_eq!(set.author().as_str(), "Jane Doe");
/// assert_eq!(set.problems()[0].solution().as_str(), "It is 4.\n");
/// ```
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    let raw = parse_raw(input)?;
    match build_document(raw) {
        Ok(document) => {
            debug!(
                kind = %document.kind(),
                children = document.child_count(),
                "parsed document"
            );
            Ok(document)
        }
        Err(e) => {
            debug!(error = %e, "document rejected during construction");
            Err(ParseError::invalid(input, e.span, e.source))
        }
    }
}

/// Run only the grammar, returning the raw captures.
pub fn parse_raw(input: &str) -> Result<RawDocument, ParseError> {
    document.parse(LocatingSlice::new(input)).map_err(|e| {
        let error = ParseError::syntax(input, e.offset(), e.inner().to_string());
        debug!(%error, "document rejected by grammar");
        error
    })
}

/// Parse a document that must be a problem set.
pub fn parse_problem_set(input: &str) -> Result<ProblemSet, ParseError> {
    match parse_document(input)? {
        Document::ProblemSet(set) => Ok(set),
        Document::Memorandum(_) => Err(ParseError::WrongKind {
            expected: DocumentKind::ProblemSet,
            found: DocumentKind::Memorandum,
        }),
    }
}

/// Parse a document that must be a memorandum.
pub fn parse_memorandum(input: &str) -> Result<Memorandum, ParseError> {
    match parse_document(input)? {
        Document::Memorandum(memo) => Ok(memo),
        Document::ProblemSet(_) => Err(ParseError::WrongKind {
            expected: DocumentKind::Memorandum,
            found: DocumentKind::ProblemSet,
        }),
    }
}
