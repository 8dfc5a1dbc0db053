//! Free-text parsing.

use winnow::prelude::*;

use super::error::ParseError;
use super::grammar::text;

/// Check that `input` is made only of terminal characters and return it.
///
/// Terminals are ASCII letters, digits, the symbols in
/// [`SYMBOLS`](super::SYMBOLS), spaces and newlines. Empty input is an error.
pub fn parse_text(input: &str) -> Result<String, ParseError> {
    match text.parse(input) {
        Ok(parsed) => Ok(parsed.to_string()),
        Err(e) => {
            let offset = e.offset();
            let message = match input[offset..].chars().next() {
                Some(c) => format!("unexpected character {c:?} at offset {offset}"),
                None => "no text found".to_string(),
            };
            Err(ParseError::Text {
                input: input.to_string(),
                message,
            })
        }
    }
}
