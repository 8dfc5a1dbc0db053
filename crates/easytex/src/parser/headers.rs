//! Order-independent matching of document header fields.
//!
//! Header fields may appear in any order, each at most once. The combinator
//! repeatedly tries every rule that has not matched yet against the next
//! line, stops when none applies, and only then checks that every required
//! field was seen.

use tracing::trace;
use winnow::combinator::{opt, peek};
use winnow::error::{ContextError, ErrMode, StrContextValue};
use winnow::prelude::*;

use super::grammar::{Input, blank_lines, field, unmet};
use super::keyword::Keyword;
use super::raw::Spanned;

/// Indentation level of header fields inside a document.
const HEADER_LEVEL: usize = 1;

/// One field of a header set.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderRule {
    pub keyword: Keyword,
    pub required: bool,
}

impl HeaderRule {
    pub const fn mandatory(keyword: Keyword) -> Self {
        Self {
            keyword,
            required: true,
        }
    }

    pub const fn optional(keyword: Keyword) -> Self {
        Self {
            keyword,
            required: false,
        }
    }
}

/// Header values captured so far, keyed by keyword.
#[derive(Debug, Default)]
pub(crate) struct HeaderCaptures {
    fields: Vec<(Keyword, Spanned<String>)>,
}

impl HeaderCaptures {
    fn contains(&self, keyword: Keyword) -> bool {
        self.fields.iter().any(|(k, _)| *k == keyword)
    }

    fn insert(&mut self, keyword: Keyword, value: Spanned<String>) {
        self.fields.push((keyword, value));
    }

    /// Remove and return the value captured for `keyword`, if any.
    pub fn take(&mut self, keyword: Keyword) -> Option<Spanned<String>> {
        let index = self.fields.iter().position(|(k, _)| *k == keyword)?;
        Some(self.fields.swap_remove(index).1)
    }

    /// Remove and return a value whose presence [`header_fields`] has
    /// already checked.
    pub fn required(&mut self, keyword: Keyword) -> ModalResult<Spanned<String>> {
        self.take(keyword)
            .ok_or_else(|| ErrMode::Cut(ContextError::new()))
    }
}

/// Match the header fields described by `rules`, in any order.
///
/// A field given twice and a required field never given are committed
/// errors positioned at the first line after the header.
pub(crate) fn header_fields<'i>(
    rules: &'static [HeaderRule],
) -> impl Parser<Input<'i>, HeaderCaptures, ErrMode<ContextError>> {
    move |input: &mut Input<'i>| -> ModalResult<HeaderCaptures> {
        let mut captures = HeaderCaptures::default();
        while let Some((keyword, value)) = next_header(input, rules, &captures)? {
            trace!(%keyword, value = %value.value, "matched header field");
            captures.insert(keyword, value);
        }

        blank_lines(input)?;

        // Every rule still able to match here has matched before.
        if rules
            .iter()
            .any(|rule| peek(field(HEADER_LEVEL, rule.keyword)).parse_next(input).is_ok())
        {
            return unmet(
                "header",
                StrContextValue::Description("each header field at most once"),
                input,
            );
        }

        if let Some(rule) = rules
            .iter()
            .find(|rule| rule.required && !captures.contains(rule.keyword))
        {
            return unmet(
                "header",
                StrContextValue::StringLiteral(rule.keyword.introducer()),
                input,
            );
        }

        Ok(captures)
    }
}

/// Try each rule that has not matched yet against the next line.
fn next_header(
    input: &mut Input<'_>,
    rules: &[HeaderRule],
    captures: &HeaderCaptures,
) -> ModalResult<Option<(Keyword, Spanned<String>)>> {
    for rule in rules.iter().filter(|rule| !captures.contains(rule.keyword)) {
        if let Some(value) = opt(field(HEADER_LEVEL, rule.keyword)).parse_next(input)?
        {
            return Ok(Some((rule.keyword, value)));
        }
    }
    Ok(None)
}
