use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Verdict of one indentation analysis.
///
/// Computed once per document and returned by value; carries no reference back to
/// the analyzed text.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndentGuess {
    /// True when indentation should be typed as space characters
    pub insert_spaces: bool,
    /// Effective tab width in columns
    pub tab_size: usize,
}

impl IndentGuess {
    /// One indent level worth of text under this verdict.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size)
        } else {
            "\t".to_string()
        }
    }
}

impl Display for IndentGuess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.insert_spaces {
            write!(f, "{} spaces", self.tab_size)
        } else {
            write!(f, "tabs (width {})", self.tab_size)
        }
    }
}
