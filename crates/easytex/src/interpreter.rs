//! The renderer contract.
//!
//! A renderer ("interpreter") turns a finished [`Document`] into typeset
//! output text. The parser never calls one; renderers are downstream
//! consumers of the IR only.

use crate::ir::Document;

/// Renders a validated document into output text.
///
/// Any `Fn(&Document) -> String` is an interpreter:
///
/// ```
/// use easytex::{Document, Interpreter, parse_document};
///
/// let outline = |document: &Document| format!("{} with {} parts", document.kind(), document.child_count());
/// let source = "memorandum:\n    author: Ada\n    title: Notes\n    section:\n        title: Intro\n        content:\n            Hello.\n";
/// let document = parse_document(source).unwrap();
/// assert_eq!(outline.interpret(&document), "memorandum with 1 parts");
/// ```
pub trait Interpreter {
    fn interpret(&self, document: &Document) -> String;
}

impl<F> Interpreter for F
where
    F: Fn(&Document) -> String,
{
    fn interpret(&self, document: &Document) -> String {
        self(document)
    }
}
