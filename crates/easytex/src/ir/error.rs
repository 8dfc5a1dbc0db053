//! Construction errors for IR values.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use thiserror::Error;

/// The scalar field types of the document model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Author,
    Collaborator,
    Title,
    Subtitle,
    Date,
    School,
    Course,
    DueDate,
    Label,
    Package,
    Statement,
    Solution,
    Content,
}

impl FieldKind {
    /// Human-readable name, matching the source keyword where one exists.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Author => "author",
            FieldKind::Collaborator => "collaborator",
            FieldKind::Title => "title",
            FieldKind::Subtitle => "subtitle",
            FieldKind::Date => "date",
            FieldKind::School => "school",
            FieldKind::Course => "course",
            FieldKind::DueDate => "due_date",
            FieldKind::Label => "label",
            FieldKind::Package => "package",
            FieldKind::Statement => "statement",
            FieldKind::Solution => "solution",
            FieldKind::Content => "content",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// An IR value could not be constructed because an invariant does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrError {
    /// A scalar field was given an empty string.
    #[error("{kind} cannot be empty")]
    EmptyField { kind: FieldKind },

    /// A list field was present but held no entries.
    #[error("{kind} list cannot be empty when present")]
    EmptyList { kind: FieldKind },

    /// A composite is missing one of its required fields.
    #[error("{element} is missing its {field}")]
    MissingField {
        element: &'static str,
        field: FieldKind,
    },

    /// A problem set without problems.
    #[error("a problem set needs at least one problem")]
    NoProblems,

    /// A memorandum without sections.
    #[error("a memorandum needs at least one section")]
    NoSections,
}
