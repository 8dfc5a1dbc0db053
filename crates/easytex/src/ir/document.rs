use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use super::memorandum::Memorandum;
use super::problem_set::ProblemSet;

/// The two kinds of EasyTeX document, named by their leading identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    ProblemSet,
    Memorandum,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::ProblemSet, DocumentKind::Memorandum];

    /// The identifier that opens a document of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::ProblemSet => "problem_set",
            DocumentKind::Memorandum => "memorandum",
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A fully validated EasyTeX document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Document {
    ProblemSet(ProblemSet),
    Memorandum(Memorandum),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::ProblemSet(_) => DocumentKind::ProblemSet,
            Document::Memorandum(_) => DocumentKind::Memorandum,
        }
    }

    pub fn as_problem_set(&self) -> Option<&ProblemSet> {
        match self {
            Document::ProblemSet(set) => Some(set),
            Document::Memorandum(_) => None,
        }
    }

    pub fn as_memorandum(&self) -> Option<&Memorandum> {
        match self {
            Document::Memorandum(memo) => Some(memo),
            Document::ProblemSet(_) => None,
        }
    }

    /// Number of problems or sections.
    pub fn child_count(&self) -> usize {
        match self {
            Document::ProblemSet(set) => set.problems().len(),
            Document::Memorandum(memo) => memo.sections().len(),
        }
    }
}

impl From<ProblemSet> for Document {
    fn from(set: ProblemSet) -> Self {
        Document::ProblemSet(set)
    }
}

impl From<Memorandum> for Document {
    fn from(memo: Memorandum) -> Self {
        Document::Memorandum(memo)
    }
}
