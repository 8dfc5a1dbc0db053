//! EasyTeX: an indentation-sensitive markup for problem sets and memorandums.
//!
//! [`parse_document`] turns source text into a validated [`Document`]. The
//! [`formatter`] writes documents back out as canonical source, and the
//! [`Interpreter`] trait is the contract for renderers that consume them.

pub mod formatter;
pub mod interpreter;
pub mod ir;
pub mod loader;
pub mod parser;

pub use formatter::format_document;
pub use interpreter::Interpreter;
pub use ir::{Document, DocumentKind, IrError, Memorandum, ProblemSet};
pub use loader::{LoadError, load_document};
pub use parser::{ParseError, parse_document, parse_memorandum, parse_problem_set, parse_text};
