//! Integration tests for loading documents from disk.

mod common;

use std::fs;

use common::{full_memorandum, full_problem_set};
use easytex::{DocumentKind, LoadError, ParseError, load_document};
use tempfile::TempDir;

#[test]
fn test_load_problem_set() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("homework.etex");
    fs::write(&path, full_problem_set()).unwrap();

    let document = load_document(&path).unwrap();
    assert_eq!(document.kind(), DocumentKind::ProblemSet);
    assert_eq!(document.child_count(), 2);
}

#[test]
fn test_load_memorandum() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.etex");
    fs::write(&path, full_memorandum()).unwrap();

    let document = load_document(&path).unwrap();
    assert_eq!(document.kind(), DocumentKind::Memorandum);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.etex");

    let err = load_document(&path).unwrap_err();
    match &err {
        LoadError::Io { path: err_path, .. } => assert_eq!(err_path, &path),
        other => panic!("expected I/O error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("failed to read '"));
}

#[test]
fn test_parse_failure_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.etex");
    fs::write(&path, "problem_set:\n    author: Jane Doe\n").unwrap();

    let err = load_document(&path).unwrap_err();
    match &err {
        LoadError::Parse {
            path: err_path,
            content,
            source,
        } => {
            assert_eq!(err_path, &path);
            assert_eq!(content, "problem_set:\n    author: Jane Doe\n");
            assert!(matches!(source, ParseError::Syntax { line: 3, .. }));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.to_string().contains("broken.etex"));
}
