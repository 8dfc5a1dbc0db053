//! Raw captures produced by the grammar.
//!
//! One record per grammar rule. Values are the exact source text of each
//! capture, with the byte span it came from; nothing here has been validated
//! or trimmed. Body lines keep their leading indentation.

use std::ops::Range;

use crate::ir::DocumentKind;

/// A captured value and the byte range of source it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Range<usize>,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Range<usize>) -> Self {
        Self { value, span }
    }
}

/// A raw document, discriminated by its leading identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDocument {
    ProblemSet(RawProblemSet),
    Memorandum(RawMemorandum),
}

impl RawDocument {
    pub fn kind(&self) -> DocumentKind {
        match self {
            RawDocument::ProblemSet(_) => DocumentKind::ProblemSet,
            RawDocument::Memorandum(_) => DocumentKind::Memorandum,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProblemSet {
    pub author: Spanned<String>,
    pub collaborators: Option<Spanned<String>>,
    pub packages: Option<Spanned<String>>,
    pub due_date: Option<Spanned<String>>,
    pub title: Option<Spanned<String>>,
    pub course: Option<Spanned<String>>,
    pub school: Option<Spanned<String>>,
    pub problems: Vec<RawProblem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProblem {
    /// Span of the `problem:` introducer line.
    pub span: Range<usize>,
    pub label: Option<Spanned<String>>,
    pub statement: Spanned<Vec<String>>,
    pub solution: Spanned<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMemorandum {
    pub author: Spanned<String>,
    pub collaborators: Option<Spanned<String>>,
    pub packages: Option<Spanned<String>>,
    pub date: Option<Spanned<String>>,
    pub title: Spanned<String>,
    pub subtitle: Option<Spanned<String>>,
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    /// Span of the `section:` introducer line.
    pub span: Range<usize>,
    pub title: Option<Spanned<String>>,
    pub content: Spanned<Vec<String>>,
}
