use bon::bon;
use serde::Serialize;

use super::error::IrError;
use super::fields::{Author, Collaborator, Content, Date, Package, Subtitle, Title};

/// A titled section of a memorandum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    title: Title,
    content: Content,
}

impl Section {
    pub fn new(title: Title, content: Content) -> Self {
        Self { title, content }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn content(&self) -> &Content {
        &self.content
    }
}

/// A memorandum document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Memorandum {
    author: Author,
    collaborators: Option<Vec<Collaborator>>,
    date: Option<Date>,
    title: Title,
    subtitle: Option<Subtitle>,
    packages: Option<Vec<Package>>,
    sections: Vec<Section>,
}

#[bon]
impl Memorandum {
    /// Builds a memorandum, checking that it has at least one section and
    /// that present list fields are not empty.
    #[builder]
    pub fn new(
        author: Author,
        collaborators: Option<Vec<Collaborator>>,
        date: Option<Date>,
        title: Title,
        subtitle: Option<Subtitle>,
        packages: Option<Vec<Package>>,
        sections: Vec<Section>,
    ) -> Result<Self, IrError> {
        if sections.is_empty() {
            return Err(IrError::NoSections);
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
            date,
            title,
            subtitle,
            packages,
            sections,
        })
    }
}

impl Memorandum {
    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn collaborators(&self) -> Option<&[Collaborator]> {
        self.collaborators.as_deref()
    }

    pub fn date(&self) -> Option<&Date> {
        self.date.as_ref()
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&Subtitle> {
        self.subtitle.as_ref()
    }

    pub fn packages(&self) -> Option<&[Package]> {
        self.packages.as_deref()
    }

    /// Sections in source order. Never empty.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}
