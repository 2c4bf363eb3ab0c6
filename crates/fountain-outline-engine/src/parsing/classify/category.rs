use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The semantic category of a single script line.
///
/// Exactly one category is assigned per line. The serialized form of each
/// variant is its highlighting token name, the key the presentation layer
/// maps to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineCategory {
    /// `# ...`
    Comment,
    /// `INT.`, `EXT.`, `EST.` or `INT./EXT.` slug lines.
    SceneHeading,
    /// An upper-case speaker name, optionally followed by `(V.O.)` and the like.
    Character,
    /// `(beat)`
    Parenthetical,
    /// `> CUT TO:`
    Transition,
    /// `[[ ... ]]`
    Note,
    /// `===`
    PageBreak,
    /// `= ...`
    SynopsisSeparator,
    /// `.FORCED HEADING`
    SceneNumber,
    /// `*...`
    Emphasis,
    /// `_..._`
    Underline,
    #[serde(rename = "emptyLine")]
    Blank,
    Dialogue,
    Action,
}

impl LineCategory {
    /// Every category, in classification rule order.
    pub const ALL: [LineCategory; 14] = [
        LineCategory::Comment,
        LineCategory::SceneHeading,
        LineCategory::Character,
        LineCategory::Parenthetical,
        LineCategory::Transition,
        LineCategory::Note,
        LineCategory::PageBreak,
        LineCategory::SynopsisSeparator,
        LineCategory::SceneNumber,
        LineCategory::Emphasis,
        LineCategory::Underline,
        LineCategory::Blank,
        LineCategory::Dialogue,
        LineCategory::Action,
    ];

    /// The highlighting token name for this category.
    pub fn token_name(self) -> &'static str {
        match self {
            LineCategory::Comment => "comment",
            LineCategory::SceneHeading => "sceneHeading",
            LineCategory::Character => "character",
            LineCategory::Parenthetical => "parenthetical",
            LineCategory::Transition => "transition",
            LineCategory::Note => "note",
            LineCategory::PageBreak => "pageBreak",
            LineCategory::SynopsisSeparator => "synopsisSeparator",
            LineCategory::SceneNumber => "sceneNumber",
            LineCategory::Emphasis => "emphasis",
            LineCategory::Underline => "underline",
            LineCategory::Blank => "emptyLine",
            LineCategory::Dialogue => "dialogue",
            LineCategory::Action => "action",
        }
    }
}

impl fmt::Display for LineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token_name())
    }
}

impl FromStr for LineCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineCategory::ALL
            .into_iter()
            .find(|c| c.token_name() == s)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}
