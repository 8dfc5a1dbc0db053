//! Scalar field types.
//!
//! Each type wraps a single non-empty string. Values are created once while
//! building a document and never change afterwards.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;

use serde::Serialize;

use super::error::{FieldKind, IrError};

macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps `value`, rejecting the empty string.
            pub fn new(value: impl Into<String>) -> Result<Self, IrError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(IrError::EmptyField {
                        kind: FieldKind::$kind,
                    });
                }
                Ok(Self(value))
            }

            /// The field kind this type represents.
            pub const KIND: FieldKind = FieldKind::$kind;

            /// Get the wrapped text.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the owned text.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IrError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IrError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

text_field! {
    /// The author of a problem set or memorandum.
    Author => Author
}

text_field! {
    /// One entry of a `collaborators:` list.
    Collaborator => Collaborator
}

text_field! {
    /// A document title, or the title of a memorandum section.
    Title => Title
}

text_field! {
    /// A memorandum subtitle.
    Subtitle => Subtitle
}

text_field! {
    /// A memorandum date. Kept as free text.
    Date => Date
}

text_field! {
    School => School
}

text_field! {
    Course => Course
}

text_field! {
    /// A problem set due date. Kept as free text.
    DueDate => DueDate
}

text_field! {
    /// An optional problem label, shown in place of the problem number.
    Label => Label
}

text_field! {
    /// One entry of a `packages:` list, naming a package for the renderer to load.
    Package => Package
}

text_field! {
    /// Problem statement text with body indentation removed.
    Statement => Statement
}

text_field! {
    /// Problem solution text with body indentation removed.
    ///
    /// Solutions produced by the parser always end with exactly one newline.
    Solution => Solution
}

text_field! {
    /// Section content text with body indentation removed.
    Content => Content
}
