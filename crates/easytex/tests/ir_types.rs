//! Integration tests for IR construction and invariants.

use easytex::ir::{
    Author, Collaborator, Content, FieldKind, Label, Package, Problem, Section, Solution,
    Statement, Title,
};
use easytex::{Document, DocumentKind, IrError, Memorandum, ProblemSet};
use insta::assert_snapshot;

fn problem() -> Problem {
    Problem::new(
        None,
        Statement::new("What is 2+2?").unwrap(),
        Solution::new("It is 4.\n").unwrap(),
    )
}

fn section() -> Section {
    Section::new(Title::new("Intro").unwrap(), Content::new("Hello.").unwrap())
}

#[test]
fn test_field_rejects_empty_text() {
    assert_eq!(
        Author::new("").unwrap_err(),
        IrError::EmptyField {
            kind: FieldKind::Author
        }
    );
    assert_eq!(
        Statement::try_from("").unwrap_err(),
        IrError::EmptyField {
            kind: FieldKind::Statement
        }
    );
}

#[test]
fn test_field_keeps_text_verbatim() {
    let title = Title::new("  spaced  ").unwrap();
    assert_eq!(title.as_str(), "  spaced  ");
    assert_eq!(title.to_string(), "  spaced  ");
    assert_eq!(title.into_inner(), "  spaced  ");
}

#[test]
fn test_field_derefs_to_str() {
    let label = Label::try_from(String::from("1.a")).unwrap();
    assert_eq!(label.len(), 3);
    assert!(label.starts_with('1'));
    assert_eq!(Label::KIND, FieldKind::Label);
}

#[test]
fn test_fields_compare_structurally() {
    assert_eq!(
        Collaborator::new("Alice").unwrap(),
        Collaborator::new(String::from("Alice")).unwrap()
    );
    assert_ne!(
        Package::new("amsmath").unwrap(),
        Package::new("amssymb").unwrap()
    );
}

#[test]
fn test_problem_set_needs_problems() {
    let err = ProblemSet::builder()
        .author(Author::new("Jane Doe").unwrap())
        .problems(Vec::new())
        .build()
        .unwrap_err();
    assert_eq!(err, IrError::NoProblems);
}

#[test]
fn test_present_list_must_not_be_empty() {
    let err = ProblemSet::builder()
        .author(Author::new("Jane Doe").unwrap())
        .collaborators(Vec::new())
        .problems(vec![problem()])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        IrError::EmptyList {
            kind: FieldKind::Collaborator
        }
    );

    let err = Memorandum::builder()
        .author(Author::new("Jane Doe").unwrap())
        .title(Title::new("Notes").unwrap())
        .packages(Vec::new())
        .sections(vec![section()])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        IrError::EmptyList {
            kind: FieldKind::Package
        }
    );
}

#[test]
fn test_memorandum_needs_sections() {
    let err = Memorandum::builder()
        .author(Author::new("Jane Doe").unwrap())
        .title(Title::new("Notes").unwrap())
        .sections(Vec::new())
        .build()
        .unwrap_err();
    assert_eq!(err, IrError::NoSections);
}

#[test]
fn test_built_problem_set_is_a_document() {
    let set = ProblemSet::builder()
        .author(Author::new("Jane Doe").unwrap())
        .title(Title::new("Homework").unwrap())
        .problems(vec![problem(), problem()])
        .build()
        .unwrap();
    let document = Document::from(set.clone());
    assert_eq!(document.kind(), DocumentKind::ProblemSet);
    assert_eq!(document.as_problem_set(), Some(&set));
    assert_eq!(document.child_count(), 2);
}

#[test]
fn test_document_kind_names() {
    assert_eq!(DocumentKind::ProblemSet.to_string(), "problem_set");
    assert_eq!(DocumentKind::Memorandum.to_string(), "memorandum");
    assert_eq!(DocumentKind::ALL.len(), 2);
}

#[test]
fn test_error_messages() {
    assert_snapshot!(
        IrError::EmptyField { kind: FieldKind::DueDate }.to_string(),
        @"due_date cannot be empty"
    );
    assert_snapshot!(
        IrError::EmptyList { kind: FieldKind::Package }.to_string(),
        @"package list cannot be empty when present"
    );
    assert_snapshot!(
        IrError::MissingField { element: "section", field: FieldKind::Title }.to_string(),
        @"section is missing its title"
    );
    assert_snapshot!(IrError::NoProblems.to_string(), @"a problem set needs at least one problem");
    assert_snapshot!(IrError::NoSections.to_string(), @"a memorandum needs at least one section");
}
