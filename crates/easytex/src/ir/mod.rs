//! The EasyTeX document model.
//!
//! The IR is a strict tree of immutable values: a [`Document`] owns its header
//! fields and an ordered list of problems or sections, which in turn own
//! their scalar fields. Every scalar rejects empty text, and every composite
//! checks its structural invariants when it is built.

mod document;
mod error;
mod fields;
mod memorandum;
mod problem_set;

pub use document::{Document, DocumentKind};
pub use error::{FieldKind, IrError};
pub use fields::{
    Author, Collaborator, Content, Course, Date, DueDate, Label, Package, School, Solution,
    Statement, Subtitle, Title,
};
pub use memorandum::{Memorandum, Section};
pub use problem_set::{Problem, ProblemSet};
