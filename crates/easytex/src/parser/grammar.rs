//! EasyTeX grammar.
//!
//! Indentation is counted in tabs of exactly four spaces. Header fields sit
//! one tab deep, a problem's label and a section's title two tabs deep, and
//! body lines of `statement:`, `solution:` and `content:` blocks carry a
//! twelve-space prefix. Whitespace-only lines are blank and may appear
//! between any two lines.
//!
//! Rules produce the raw captures in [`super::raw`]; nothing here validates
//! field values.

use winnow::ascii::line_ending;
use winnow::combinator::{alt, cut_err, eof, fail, not, opt, peek, repeat};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::stream::LocatingSlice;
use winnow::token::{none_of, take_till, take_while};

use super::headers::{HeaderRule, header_fields};
use super::keyword::Keyword;
use super::raw::{
    RawDocument, RawMemorandum, RawProblem, RawProblemSet, RawSection, Spanned,
};
use crate::ir::DocumentKind;

/// Document input: source text that tracks byte offsets for spans.
pub(crate) type Input<'i> = LocatingSlice<&'i str>;

/// Width of one indentation level.
pub const TAB_WIDTH: usize = 4;

/// Leading indentation required on every body line.
pub const BODY_INDENT: usize = 3 * TAB_WIDTH;

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "[]{}()<>'\"=|.,;\\/:-$?!*_+#^`";
pub const WHITESPACE: &str = " \n";

const PROBLEM_SET_HEADERS: &[HeaderRule] = &[
    HeaderRule::mandatory(Keyword::Author),
    HeaderRule::optional(Keyword::Collaborators),
    HeaderRule::optional(Keyword::Packages),
    HeaderRule::optional(Keyword::DueDate),
    HeaderRule::optional(Keyword::Title),
    HeaderRule::optional(Keyword::Course),
    HeaderRule::optional(Keyword::School),
];

const MEMORANDUM_HEADERS: &[HeaderRule] = &[
    HeaderRule::mandatory(Keyword::Author),
    HeaderRule::optional(Keyword::Collaborators),
    HeaderRule::optional(Keyword::Packages),
    HeaderRule::optional(Keyword::Date),
    HeaderRule::mandatory(Keyword::Title),
    HeaderRule::optional(Keyword::Subtitle),
];

/// Check if a character belongs to the free-text terminal set.
pub fn is_terminal(c: char) -> bool {
    LETTERS.contains(c) || DIGITS.contains(c) || SYMBOLS.contains(c) || WHITESPACE.contains(c)
}

/// Free text: a non-empty run of terminal characters.
pub(crate) fn text<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_terminal).parse_next(input)
}

/// Parse a complete document.
pub(crate) fn document(input: &mut Input<'_>) -> ModalResult<RawDocument> {
    blank_lines(input)?;
    alt((
        problem_set.map(RawDocument::ProblemSet),
        memorandum.map(RawDocument::Memorandum),
        fail.context(StrContext::Label("document kind"))
            .context(StrContext::Expected(StrContextValue::StringLiteral(
                "problem_set:",
            )))
            .context(StrContext::Expected(StrContextValue::StringLiteral(
                "memorandum:",
            ))),
    ))
    .parse_next(input)
}

/// Parse `problem_set:` and everything below it.
fn problem_set(input: &mut Input<'_>) -> ModalResult<RawProblemSet> {
    document_introducer(DocumentKind::ProblemSet).parse_next(input)?;
    cut_err(problem_set_body).parse_next(input)
}

fn problem_set_body(input: &mut Input<'_>) -> ModalResult<RawProblemSet> {
    let mut headers = header_fields(PROBLEM_SET_HEADERS).parse_next(input)?;
    let problems = children(Keyword::Problem, "problem set", problem).parse_next(input)?;
    Ok(RawProblemSet {
        author: headers.required(Keyword::Author)?,
        collaborators: headers.take(Keyword::Collaborators),
        packages: headers.take(Keyword::Packages),
        due_date: headers.take(Keyword::DueDate),
        title: headers.take(Keyword::Title),
        course: headers.take(Keyword::Course),
        school: headers.take(Keyword::School),
        problems,
    })
}

/// Parse `memorandum:` and everything below it.
fn memorandum(input: &mut Input<'_>) -> ModalResult<RawMemorandum> {
    document_introducer(DocumentKind::Memorandum).parse_next(input)?;
    cut_err(memorandum_body).parse_next(input)
}

fn memorandum_body(input: &mut Input<'_>) -> ModalResult<RawMemorandum> {
    let mut headers = header_fields(MEMORANDUM_HEADERS).parse_next(input)?;
    let sections = children(Keyword::Section, "memorandum", section).parse_next(input)?;
    Ok(RawMemorandum {
        author: headers.required(Keyword::Author)?,
        collaborators: headers.take(Keyword::Collaborators),
        packages: headers.take(Keyword::Packages),
        date: headers.take(Keyword::Date),
        title: headers.required(Keyword::Title)?,
        subtitle: headers.take(Keyword::Subtitle),
        sections,
    })
}

/// Parse one or more child blocks opened by `keyword`, running to the end
/// of input.
fn children<'i, O, P>(
    keyword: Keyword,
    owner: &'static str,
    mut child: P,
) -> impl Parser<Input<'i>, Vec<O>, ErrMode<ContextError>>
where
    P: Parser<Input<'i>, O, ErrMode<ContextError>>,
{
    move |input: &mut Input<'i>| -> ModalResult<Vec<O>> {
        peek((blank_lines, introducer(1, keyword)))
            .context(StrContext::Label(owner))
            .context(StrContext::Expected(StrContextValue::StringLiteral(
                keyword.introducer(),
            )))
            .parse_next(input)?;
        let items: Vec<O> = repeat(1.., child.by_ref()).parse_next(input)?;
        (blank_lines, take_while(0.., ' '), eof)
            .context(StrContext::Label(owner))
            .context(StrContext::Expected(StrContextValue::StringLiteral(
                keyword.introducer(),
            )))
            .context(StrContext::Expected(StrContextValue::Description(
                "end of input",
            )))
            .parse_next(input)?;
        Ok(items)
    }
}

/// Parse a `problem:` block: optional label, then statement, then solution.
fn problem(input: &mut Input<'_>) -> ModalResult<RawProblem> {
    blank_lines(input)?;
    let span = introducer(1, Keyword::Problem).span().parse_next(input)?;
    let (label, statement, solution) = cut_err((
        opt(field(2, Keyword::Label)),
        block(Keyword::Statement, "problem"),
        block(Keyword::Solution, "problem"),
    ))
    .parse_next(input)?;
    Ok(RawProblem {
        span,
        label,
        statement,
        solution,
    })
}

/// Parse a `section:` block: optional title, then content.
fn section(input: &mut Input<'_>) -> ModalResult<RawSection> {
    blank_lines(input)?;
    let span = introducer(1, Keyword::Section).span().parse_next(input)?;
    let (title, content) = cut_err((
        opt(field(2, Keyword::Title)),
        block(Keyword::Content, "section"),
    ))
    .parse_next(input)?;
    Ok(RawSection {
        span,
        title,
        content,
    })
}

/// Parse a multi-line block: `keyword:` two tabs deep, then one or more body
/// lines.
fn block<'i>(
    keyword: Keyword,
    owner: &'static str,
) -> impl Parser<Input<'i>, Spanned<Vec<String>>, ErrMode<ContextError>> {
    move |input: &mut Input<'i>| -> ModalResult<Spanned<Vec<String>>> {
        (blank_lines, introducer(2, keyword))
            .context(StrContext::Label(owner))
            .context(StrContext::Expected(StrContextValue::StringLiteral(
                keyword.introducer(),
            )))
            .parse_next(input)?;
        let (lines, span) = cut_err(repeat(1.., body_line))
            .context(StrContext::Label(keyword.as_str()))
            .context(StrContext::Expected(StrContextValue::Description(
                "a line indented by twelve spaces",
            )))
            .with_span()
            .parse_next(input)?;
        Ok(Spanned::new(lines, span))
    }
}

/// Parse one body line, keeping its indentation. The text after the
/// prefix must contain a non-space character.
fn body_line(input: &mut Input<'_>) -> ModalResult<String> {
    blank_lines(input)?;
    let line = (
        take_while(BODY_INDENT..=BODY_INDENT, ' '),
        take_while(0.., ' '),
        none_of(['\r', '\n']),
        take_till(0.., ['\r', '\n']),
    )
        .take()
        .parse_next(input)?;
    line_end(input)?;
    Ok(line.to_owned())
}

/// Parse a single-line field: `keyword: value` at the given indentation
/// level. The value is the rest of the line, untrimmed.
pub(crate) fn field<'i>(
    level: usize,
    keyword: Keyword,
) -> impl Parser<Input<'i>, Spanned<String>, ErrMode<ContextError>> {
    move |input: &mut Input<'i>| -> ModalResult<Spanned<String>> {
        blank_lines(input)?;
        (indent(level), keyword.as_str(), ':').parse_next(input)?;
        let (value, span) = opt((' ', take_till(0.., ['\r', '\n'])).map(|(_, value)| value))
            .with_span()
            .parse_next(input)?;
        line_end(input)?;
        Ok(Spanned::new(value.unwrap_or_default().to_owned(), span))
    }
}

/// Parse the line that opens a document.
fn document_introducer<'i>(
    kind: DocumentKind,
) -> impl Parser<Input<'i>, (), ErrMode<ContextError>> {
    (kind.as_str(), ':', take_while(0.., ' '), line_end).void()
}

/// Parse the line that opens a block: `keyword:` alone on its line.
fn introducer<'i>(
    level: usize,
    keyword: Keyword,
) -> impl Parser<Input<'i>, (), ErrMode<ContextError>> {
    (
        indent(level),
        keyword.as_str(),
        ':',
        take_while(0.., ' '),
        line_end,
    )
        .void()
}

/// Match exactly `level` tabs of indentation.
fn indent<'i>(level: usize) -> impl Parser<Input<'i>, (), ErrMode<ContextError>> {
    let width = level * TAB_WIDTH;
    (take_while(width..=width, ' '), not(' ')).void()
}

/// Match a line ending or the end of input.
fn line_end(input: &mut Input<'_>) -> ModalResult<()> {
    alt((line_ending, eof)).void().parse_next(input)
}

/// Skip any number of whitespace-only lines.
pub(crate) fn blank_lines(input: &mut Input<'_>) -> ModalResult<()> {
    repeat(0.., (take_while(0.., ' '), line_ending).void()).parse_next(input)
}

/// Fail with a committed error describing what was expected here.
pub(crate) fn unmet<O>(
    label: &'static str,
    expected: StrContextValue,
    input: &mut Input<'_>,
) -> ModalResult<O> {
    cut_err(fail)
        .context(StrContext::Label(label))
        .context(StrContext::Expected(expected))
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<RawDocument, String> {
        document
            .parse(LocatingSlice::new(source))
            .map_err(|e| e.inner().to_string())
    }

    #[test]
    fn terminal_set_covers_latex_markup() {
        assert!("\\textbf{Hello World}".chars().all(is_terminal));
        assert!(!is_terminal('\t'));
        assert!(!is_terminal('%'));
    }

    #[test]
    fn body_lines_keep_their_indentation() {
        let source = "problem_set:\n    author: Ada\n    problem:\n        statement:\n            one\n              two\n        solution:\n            three\n";
        let RawDocument::ProblemSet(set) = parse(source).unwrap() else {
            panic!("expected problem set");
        };
        let problem = &set.problems[0];
        assert_eq!(
            problem.statement.value,
            vec!["            one", "              two"]
        );
        assert_eq!(problem.solution.value, vec!["            three"]);
    }

    #[test]
    fn field_spans_point_into_the_source() {
        let source = "problem_set:\n    author: Ada\n    problem:\n        statement:\n            a\n        solution:\n            b";
        let RawDocument::ProblemSet(set) = parse(source).unwrap() else {
            panic!("expected problem set");
        };
        assert_eq!(&source[set.author.span.clone()], " Ada");
        assert_eq!(&source[set.problems[0].span.clone()], "    problem:\n");
    }

    #[test]
    fn keyword_without_value_captures_empty_text() {
        let source = "memorandum:\n    author: Ada\n    title:\n    section:\n        content:\n            x\n";
        let RawDocument::Memorandum(memo) = parse(source).unwrap() else {
            panic!("expected memorandum");
        };
        assert_eq!(memo.title.value, "");
    }

    #[test]
    fn blank_lines_are_skipped_between_lines() {
        let source = "\nproblem_set:\n\n    author: Ada\n  \n    problem:\n        statement:\n            a\n\n            b\n        solution:\n            c\n\n";
        let RawDocument::ProblemSet(set) = parse(source).unwrap() else {
            panic!("expected problem set");
        };
        assert_eq!(set.problems[0].statement.value.len(), 2);
    }

    #[test]
    fn trailing_whitespace_line_at_end_of_input_is_not_body_text() {
        let source = "problem_set:\n    author: Ada\n    problem:\n        statement:\n            a\n        solution:\n            A\n              ";
        let RawDocument::ProblemSet(set) = parse(source).unwrap() else {
            panic!("expected problem set");
        };
        assert_eq!(set.problems[0].solution.value, vec!["            A"]);
    }

    #[test]
    fn over_indented_header_is_rejected() {
        let source = "problem_set:\n     author: Ada\n    problem:\n        statement:\n            a\n        solution:\n            b\n";
        assert!(parse(source).is_err());
    }

    #[test]
    fn literal_tabs_are_not_indentation() {
        let source = "problem_set:\n\tauthor: Ada\n\tproblem:\n\t\tstatement:\n\t\t\ta\n\t\tsolution:\n\t\t\tb\n";
        assert!(parse(source).is_err());
    }

    #[test]
    fn unknown_document_kind_names_the_alternatives() {
        let message = parse("essay:\n    author: Ada\n").unwrap_err();
        assert!(message.contains("document kind"));
        assert!(message.contains("`problem_set:`"));
        assert!(message.contains("`memorandum:`"));
    }
}
