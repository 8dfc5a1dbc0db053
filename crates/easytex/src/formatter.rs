//! Formats documents back into canonical EasyTeX source.
//!
//! Output uses four-space tabs, the header order of the reference layout
//! and twelve-space body indentation. The trailing newline the parser adds
//! to every solution is folded back, so parsing the output yields the same
//! document whenever its text survives the parser's whitespace rules: body
//! lines without leading whitespace, no blank body lines, and list entries
//! without `", "` inside them.

use std::fmt::Write as _;

use crate::ir::{Document, Memorandum, Problem, ProblemSet, Section};
use crate::parser::{BODY_INDENT, Keyword, LIST_SEPARATOR, TAB_WIDTH};

/// Formats any document.
pub fn format_document(document: &Document) -> String {
    match document {
        Document::ProblemSet(set) => format_problem_set(set),
        Document::Memorandum(memo) => format_memorandum(memo),
    }
}

/// Formats a problem set.
pub fn format_problem_set(set: &ProblemSet) -> String {
    let mut out = String::from("problem_set:\n");
    push_field(&mut out, 1, Keyword::Author, Some(set.author()));
    push_list(&mut out, Keyword::Collaborators, set.collaborators());
    push_list(&mut out, Keyword::Packages, set.packages());
    push_field(&mut out, 1, Keyword::DueDate, set.due_date());
    push_field(&mut out, 1, Keyword::Title, set.title());
    push_field(&mut out, 1, Keyword::Course, set.course());
    push_field(&mut out, 1, Keyword::School, set.school());
    for problem in set.problems() {
        push_problem(&mut out, problem);
    }
    out
}

/// Formats a memorandum.
pub fn format_memorandum(memo: &Memorandum) -> String {
    let mut out = String::from("memorandum:\n");
    push_field(&mut out, 1, Keyword::Author, Some(memo.author()));
    push_list(&mut out, Keyword::Collaborators, memo.collaborators());
    push_list(&mut out, Keyword::Packages, memo.packages());
    push_field(&mut out, 1, Keyword::Date, memo.date());
    push_field(&mut out, 1, Keyword::Title, Some(memo.title()));
    push_field(&mut out, 1, Keyword::Subtitle, memo.subtitle());
    for section in memo.sections() {
        push_section(&mut out, section);
    }
    out
}

fn push_problem(out: &mut String, problem: &Problem) {
    push_introducer(out, 1, Keyword::Problem);
    push_field(out, 2, Keyword::Label, problem.label());
    push_block(out, Keyword::Statement, problem.statement());
    let solution = problem.solution().as_str();
    push_block(
        out,
        Keyword::Solution,
        solution.strip_suffix('\n').unwrap_or(solution),
    );
}

fn push_section(out: &mut String, section: &Section) {
    push_introducer(out, 1, Keyword::Section);
    push_field(out, 2, Keyword::Title, Some(section.title()));
    push_block(out, Keyword::Content, section.content());
}

fn push_field<T: AsRef<str> + ?Sized>(
    out: &mut String,
    level: usize,
    keyword: Keyword,
    value: Option<&T>,
) {
    if let Some(value) = value {
        let _ = writeln!(out, "{}{}: {}", indent(level), keyword, value.as_ref());
    }
}

fn push_list<T: AsRef<str>>(out: &mut String, keyword: Keyword, entries: Option<&[T]>) {
    if let Some(entries) = entries {
        let joined = entries
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(LIST_SEPARATOR);
        push_field(out, 1, keyword, Some(joined.as_str()));
    }
}

fn push_introducer(out: &mut String, level: usize, keyword: Keyword) {
    let _ = writeln!(out, "{}{}", indent(level), keyword.introducer());
}

fn push_block(out: &mut String, keyword: Keyword, text: &str) {
    push_introducer(out, 2, keyword);
    let body_indent = " ".repeat(BODY_INDENT);
    for line in text.split('\n') {
        let _ = writeln!(out, "{body_indent}{line}");
    }
}

fn indent(level: usize) -> String {
    " ".repeat(level * TAB_WIDTH)
}
