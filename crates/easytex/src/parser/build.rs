//! Semantic construction: raw captures to IR.
//!
//! Each function here is a pure mapping from one raw capture record to the
//! matching IR value. Whitespace rules are applied here, not in the grammar:
//! single-line values are trimmed, list values are split on `", "`, and body
//! lines lose their leading whitespace before being joined with `\n`.

use std::ops::Range;

use thiserror::Error;

use super::raw::{RawDocument, RawMemorandum, RawProblem, RawProblemSet, RawSection, Spanned};
use crate::ir::{
    Author, Collaborator, Content, Course, Date, Document, DueDate, FieldKind, IrError, Label,
    Memorandum, Package, Problem, ProblemSet, School, Section, Solution, Statement, Subtitle,
    Title,
};

/// Separator between entries of `collaborators:` and `packages:`.
pub const LIST_SEPARATOR: &str = ", ";

/// An IR value could not be built from the capture at `span`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source}")]
pub struct BuildError {
    pub span: Range<usize>,
    #[source]
    pub source: IrError,
}

impl BuildError {
    fn new(span: Range<usize>, source: IrError) -> Self {
        Self { span, source }
    }
}

/// Build a document from its raw capture.
pub fn build_document(raw: RawDocument) -> Result<Document, BuildError> {
    match raw {
        RawDocument::ProblemSet(raw) => build_problem_set(raw).map(Document::ProblemSet),
        RawDocument::Memorandum(raw) => build_memorandum(raw).map(Document::Memorandum),
    }
}

pub fn build_problem_set(raw: RawProblemSet) -> Result<ProblemSet, BuildError> {
    let span = raw.author.span.clone();
    let problems = raw
        .problems
        .into_iter()
        .map(extract_problem)
        .collect::<Result<Vec<_>, _>>()?;

    ProblemSet::builder()
        .author(extract_field(raw.author, Author::new)?)
        .maybe_collaborators(extract_list(raw.collaborators, Collaborator::new)?)
        .maybe_packages(extract_list(raw.packages, Package::new)?)
        .maybe_due_date(extract_optional(raw.due_date, DueDate::new)?)
        .maybe_title(extract_optional(raw.title, Title::new)?)
        .maybe_course(extract_optional(raw.course, Course::new)?)
        .maybe_school(extract_optional(raw.school, School::new)?)
        .problems(problems)
        .build()
        .map_err(|source| BuildError::new(span, source))
}

pub fn build_memorandum(raw: RawMemorandum) -> Result<Memorandum, BuildError> {
    let span = raw.author.span.clone();
    let sections = raw
        .sections
        .into_iter()
        .map(extract_section)
        .collect::<Result<Vec<_>, _>>()?;

    Memorandum::builder()
        .author(extract_field(raw.author, Author::new)?)
        .maybe_collaborators(extract_list(raw.collaborators, Collaborator::new)?)
        .maybe_packages(extract_list(raw.packages, Package::new)?)
        .maybe_date(extract_optional(raw.date, Date::new)?)
        .title(extract_field(raw.title, Title::new)?)
        .maybe_subtitle(extract_optional(raw.subtitle, Subtitle::new)?)
        .sections(sections)
        .build()
        .map_err(|source| BuildError::new(span, source))
}

pub fn extract_problem(raw: RawProblem) -> Result<Problem, BuildError> {
    let label = extract_optional(raw.label, Label::new)?;
    let statement = extract_statement(raw.statement)?;
    let solution = extract_solution(raw.solution)?;
    Ok(Problem::new(label, statement, solution))
}

pub fn extract_section(raw: RawSection) -> Result<Section, BuildError> {
    let Some(title) = raw.title else {
        return Err(BuildError::new(
            raw.span,
            IrError::MissingField {
                element: "section",
                field: FieldKind::Title,
            },
        ));
    };
    let title = extract_field(title, Title::new)?;
    let content = extract_block(block_text(raw.content), Content::new)?;
    Ok(Section::new(title, content))
}

pub fn extract_statement(raw: Spanned<Vec<String>>) -> Result<Statement, BuildError> {
    extract_block(block_text(raw), Statement::new)
}

/// Solutions carry exactly one trailing newline after joining.
pub fn extract_solution(raw: Spanned<Vec<String>>) -> Result<Solution, BuildError> {
    let Spanned { mut value, span } = block_text(raw);
    value.push('\n');
    extract_block(Spanned::new(value, span), Solution::new)
}

/// Build one scalar from joined block text, as is.
fn extract_block<T>(
    block: Spanned<String>,
    construct: impl FnOnce(String) -> Result<T, IrError>,
) -> Result<T, BuildError> {
    let Spanned { value, span } = block;
    construct(value).map_err(|source| BuildError::new(span, source))
}

/// Build one scalar from a single-line capture, trimming surrounding
/// whitespace.
pub fn extract_field<T>(
    field: Spanned<String>,
    construct: impl FnOnce(String) -> Result<T, IrError>,
) -> Result<T, BuildError> {
    let Spanned { value, span } = field;
    let trimmed = if value.trim().len() == value.len() {
        value
    } else {
        value.trim().to_string()
    };
    construct(trimmed).map_err(|source| BuildError::new(span, source))
}

/// Like [`extract_field`], but an omitted field is `None`.
pub fn extract_optional<T>(
    field: Option<Spanned<String>>,
    construct: impl FnOnce(String) -> Result<T, IrError>,
) -> Result<Option<T>, BuildError> {
    field.map(|field| extract_field(field, construct)).transpose()
}

/// Split a list capture on [`LIST_SEPARATOR`] and trim each entry. An
/// omitted field is `None`, never an empty list. A trailing separator leaves
/// an empty last entry, which is rejected.
pub fn extract_list<T>(
    field: Option<Spanned<String>>,
    construct: impl Fn(String) -> Result<T, IrError>,
) -> Result<Option<Vec<T>>, BuildError> {
    let Some(Spanned { value, span }) = field else {
        return Ok(None);
    };
    value
        .trim_start()
        .split(LIST_SEPARATOR)
        .map(|entry| construct(entry.trim().to_string()))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
        .map_err(|source| BuildError::new(span, source))
}

/// Strip leading whitespace from every body line and join with `\n`.
fn block_text(raw: Spanned<Vec<String>>) -> Spanned<String> {
    let text = raw
        .value
        .iter()
        .map(|line| line.trim_start())
        .collect::<Vec<_>>()
        .join("\n");
    Spanned::new(text, raw.span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanned(value: &str) -> Spanned<String> {
        Spanned::new(value.to_string(), 3..9)
    }

    fn lines(values: &[&str]) -> Spanned<Vec<String>> {
        Spanned::new(values.iter().map(ToString::to_string).collect(), 0..1)
    }

    #[test]
    fn statement_lines_are_stripped_and_joined() {
        let statement =
            extract_statement(lines(&["            a + b", "              = c  "])).unwrap();
        assert_eq!(statement.as_str(), "a + b\n= c  ");
    }

    #[test]
    fn solution_gets_one_trailing_newline() {
        let solution = extract_solution(lines(&["            a", "            b"])).unwrap();
        assert_eq!(solution.as_str(), "a\nb\n");
    }

    #[test]
    fn list_is_split_on_comma_space() {
        let list = extract_list(Some(spanned("Alice, Bob,Carol")), Collaborator::new)
            .unwrap()
            .unwrap();
        let names: Vec<&str> = list.iter().map(Collaborator::as_str).collect();
        assert_eq!(names, vec!["Alice", "Bob,Carol"]);
    }

    #[test]
    fn trailing_separator_is_an_empty_entry() {
        let error = extract_list(Some(spanned(" Alice, Bob, ")), Collaborator::new).unwrap_err();
        assert_eq!(
            error.source,
            IrError::EmptyField {
                kind: FieldKind::Collaborator
            }
        );
    }

    #[test]
    fn list_entries_are_trimmed() {
        let list = extract_list(Some(spanned(" amsmath,  amssymb  ")), Package::new)
            .unwrap()
            .unwrap();
        let names: Vec<&str> = list.iter().map(Package::as_str).collect();
        assert_eq!(names, vec!["amsmath", "amssymb"]);
    }

    #[test]
    fn block_text_keeps_trailing_whitespace() {
        let content = extract_section(RawSection {
            span: 0..1,
            title: Some(spanned("Intro")),
            content: lines(&["            a "]),
        })
        .unwrap();
        assert_eq!(content.content().as_str(), "a ");
    }

    #[test]
    fn omitted_list_is_none() {
        let list = extract_list(None, Package::new).unwrap();
        assert!(list.is_none());
    }

    #[test]
    fn empty_list_entry_keeps_the_field_span() {
        let error = extract_list(Some(spanned("Alice, , Bob")), Collaborator::new).unwrap_err();
        assert_eq!(error.span, 3..9);
        assert_eq!(
            error.source,
            IrError::EmptyField {
                kind: FieldKind::Collaborator
            }
        );
    }

    #[test]
    fn whitespace_only_field_is_empty() {
        let error = extract_field(spanned("   "), Title::new).unwrap_err();
        assert_eq!(
            error.source,
            IrError::EmptyField {
                kind: FieldKind::Title
            }
        );
    }

    #[test]
    fn section_without_title_is_rejected() {
        let raw = RawSection {
            span: 20..32,
            title: None,
            content: lines(&["            text"]),
        };
        let error = extract_section(raw).unwrap_err();
        assert_eq!(error.span, 20..32);
        assert!(matches!(error.source, IrError::MissingField { .. }));
    }
}
