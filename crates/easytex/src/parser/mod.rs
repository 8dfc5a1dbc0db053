//! EasyTeX parser.
//!
//! Parsing runs in two stages. The grammar turns source text into raw
//! captures (see [`raw`]), then the builder maps those captures into the
//! validated IR, applying whitespace rules and value invariants. Both stages
//! are exposed so tooling can inspect the raw captures on their own.

mod build;
mod document;
pub mod error;
mod grammar;
mod headers;
mod keyword;
pub mod raw;
mod text;

pub use build::{
    BuildError, LIST_SEPARATOR, build_document, build_memorandum, build_problem_set,
    extract_field, extract_list, extract_optional, extract_problem, extract_section,
    extract_solution, extract_statement,
};
pub use document::{parse_document, parse_memorandum, parse_problem_set, parse_raw};
pub use error::{ParseError, compute_suggestions};
pub use grammar::{BODY_INDENT, DIGITS, LETTERS, SYMBOLS, TAB_WIDTH, WHITESPACE, is_terminal};
pub use keyword::Keyword;
pub use text::parse_text;
