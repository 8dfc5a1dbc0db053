//! Integration tests for free-text parsing.

use easytex::{ParseError, parse_text};

#[test]
fn test_basic_text() {
    assert_eq!(parse_text("Basic").unwrap(), "Basic");
}

#[test]
fn test_text_with_spaces() {
    assert_eq!(parse_text("One Space").unwrap(), "One Space");
}

#[test]
fn test_text_with_symbols() {
    assert_eq!(
        parse_text("\\textbf{Hello World}").unwrap(),
        "\\textbf{Hello World}"
    );
}

#[test]
fn test_text_keeps_whitespace_layout() {
    let input = "  two  words\n    indented line\n";
    assert_eq!(parse_text(input).unwrap(), input);
}

#[test]
fn test_every_terminal_class() {
    let input = "Az09 []{}()<>'\"=|.,;\\/:-$?!*_+#^`";
    assert_eq!(parse_text(input).unwrap(), input);
}

#[test]
fn test_empty_text_is_rejected() {
    let err = parse_text("").unwrap_err();
    match err {
        ParseError::Text { input, message } => {
            assert_eq!(input, "");
            assert_eq!(message, "no text found");
        }
        other => panic!("expected text error, got {other:?}"),
    }
}

#[test]
fn test_unknown_character_is_rejected() {
    let err = parse_text("50% off").unwrap_err();
    assert!(!err.is_document_error());
    match err {
        ParseError::Text { input, message } => {
            assert_eq!(input, "50% off");
            assert!(message.contains("'%'"));
            assert!(message.contains("offset 2"));
        }
        other => panic!("expected text error, got {other:?}"),
    }
}

#[test]
fn test_tab_character_is_rejected() {
    assert!(parse_text("a\tb").is_err());
}

#[test]
fn test_text_error_display_names_input() {
    let err = parse_text("a~b").unwrap_err();
    assert!(err.to_string().starts_with("error parsing text 'a~b'"));
}
