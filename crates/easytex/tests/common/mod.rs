//! Shared helpers for parser tests.

#![allow(dead_code)]

/// Join source lines with `\n`, ending with a newline.
pub fn lines(source: &[&str]) -> String {
    let mut text = source.join("\n");
    text.push('\n');
    text
}

/// A complete problem set using every header field.
pub fn full_problem_set() -> String {
    lines(&[
        "problem_set:",
        "    author: Paul Dapolito",
        "    collaborators: Alice, Bob",
        "    packages: amsmath, amssymb",
        "    due_date: September 21, 2015",
        "    title: Homework 2",
        "    course: CS 161",
        "    school: Example University",
        "    problem:",
        "        label: 1.a",
        "        statement:",
        "            Prove that $\\sqrt{2}$ is irrational.",
        "            Use contradiction.",
        "        solution:",
        "            Suppose $\\sqrt{2} = p/q$ in lowest terms.",
        "            Then $p^2 = 2q^2$, a contradiction.",
        "    problem:",
        "        statement:",
        "            What is 2+2?",
        "        solution:",
        "            It is 4.",
    ])
}

/// A complete memorandum using every header field.
pub fn full_memorandum() -> String {
    lines(&[
        "memorandum:",
        "    author: Paul Dapolito",
        "    collaborators: Alice, Bob",
        "    packages: graphicx",
        "    date: October 1, 2015",
        "    title: Lab Notes",
        "    subtitle: Week 5",
        "    section:",
        "        title: Overview",
        "        content:",
        "            We measured the \\textbf{period}.",
        "            Results follow.",
        "    section:",
        "        title: Results",
        "        content:",
        "            The period was 2.0 seconds.",
    ])
}
