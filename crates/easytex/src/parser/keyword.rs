use std::fmt::{Display, Formatter, Result as FmtResult};

macro_rules! keywords {
    ($($variant:ident => $text:literal),+ $(,)?) => {
        /// A keyword that opens a header field or a block.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $($variant),+
        }

        impl Keyword {
            pub const ALL: [Keyword; [$(stringify!($variant)),+].len()] = [$(Keyword::$variant),+];

            /// The keyword as written in source, without its colon.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text),+
                }
            }

            /// The keyword followed by its colon, as used in diagnostics.
            pub fn introducer(self) -> &'static str {
                match self {
                    $(Keyword::$variant => concat!($text, ":")),+
                }
            }
        }
    };
}

keywords! {
    Author => "author",
    Collaborators => "collaborators",
    Packages => "packages",
    Date => "date",
    Title => "title",
    Subtitle => "subtitle",
    School => "school",
    Course => "course",
    DueDate => "due_date",
    Label => "label",
    Problem => "problem",
    Statement => "statement",
    Solution => "solution",
    Section => "section",
    Content => "content",
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
