use bon::bon;
use serde::Serialize;

use super::error::IrError;
use super::fields::{
    Author, Collaborator, Course, DueDate, Label, Package, School, Solution, Statement, Title,
};

/// A single problem: an optional label, a statement and its solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    label: Option<Label>,
    statement: Statement,
    solution: Solution,
}

impl Problem {
    pub fn new(label: Option<Label>, statement: Statement, solution: Solution) -> Self {
        Self {
            label,
            statement,
            solution,
        }
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }
}

/// A problem set document.
///
/// Problems are kept in source order, which determines their numbering.
///
/// # Example
///
/// ```
/// use easytex::ir::{Author, Problem, ProblemSet, Solution, Statement};
///
/// let problem = Problem::new(
///     None,
///     Statement::new("What is 2+2?").unwrap(),
///     Solution::new("It is 4.\n").unwrap(),
/// );
/// let set = ProblemSet::builder()
///     .author(Author::new("Jane Doe").unwrap())
///     .problems(vec![problem])
///     .build()
///     .unwrap();
///
/// assert_eq!(set.author().as_str(), "Jane Doe");
/// assert!(set.collaborators().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemSet {
    author: Author,
    collaborators: Option<Vec<Collaborator>>,
    due_date: Option<DueDate>,
    title: Option<Title>,
    course: Option<Course>,
    school: Option<School>,
    packages: Option<Vec<Package>>,
    problems: Vec<Problem>,
}

#[bon]
impl ProblemSet {
    /// Builds a problem set, checking that it has at least one problem and
    /// that present list fields are not empty.
    #[builder]
    pub fn new(
        author: Author,
        collaborators: Option<Vec<Collaborator>>,
        due_date: Option<DueDate>,
        title: Option<Title>,
        course: Option<Course>,
        school: Option<School>,
        packages: Option<Vec<Package>>,
        problems: Vec<Problem>,
    ) -> Result<Self, IrError> {
        if problems.is_empty() {
            return Err(IrError::NoProblems);
        }
        if collaborators.as_ref().is_some_and(Vec::is_empty) {
            return Err(IrError::EmptyList {
                kind: Collaborator::KIND,
            });
        }
        if packages.as_ref().is_some_and(Vec::is_empty) {
            return Err(IrError::EmptyList {
                kind: Package::KIND,
            });
        }
        Ok(Self {
            author,
            collaborators,
            due_date,
            title,
            course,
            school,
            packages,
            problems,
        })
    }
}

impl ProblemSet {
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// `None` when the `collaborators:` field was omitted.
    pub fn collaborators(&self) -> Option<&[Collaborator]> {
        self.collaborators.as_deref()
    }

    pub fn due_date(&self) -> Option<&DueDate> {
        self.due_date.as_ref()
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    pub fn school(&self) -> Option<&School> {
        self.school.as_ref()
    }

    /// `None` when the `packages:` field was omitted.
    pub fn packages(&self) -> Option<&[Package]> {
        self.packages.as_deref()
    }

    /// Problems in source order. Never empty.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
}
