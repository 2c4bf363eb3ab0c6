//! # Line Classification
//!
//! Phase 1 of parsing: every line gets exactly one [`LineCategory`] from
//! local facts only. Rules overlap on purpose and are evaluated in a fixed
//! order, first match wins (an all-caps `INT. HOUSE` is a scene heading,
//! not a character cue, because the heading rule comes first).
//!
//! ## Modules
//!
//! - **`category`**: the `LineCategory` enumeration and its token names
//! - **`rules`**: the ordered `(Rule, LineCategory)` table

pub mod category;
pub mod rules;

pub use category::LineCategory;

use crate::parsing::{ParseOptions, rope::Line};

use rules::RULES;

/// Classifies one line of text.
///
/// Total: rule 14 (`Action`) matches anything the earlier rules did not.
pub fn classify(line: &str) -> LineCategory {
    RULES
        .iter()
        .find(|(rule, _)| rule.matches(line))
        .map_or(LineCategory::Action, |(_, category)| *category)
}

/// A line index paired with its category: the input of the region scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// 1-based line number.
    pub index: usize,
    pub category: LineCategory,
}

impl ClassifiedLine {
    pub fn new(index: usize, category: LineCategory) -> Self {
        Self { index, category }
    }
}

/// Classifies script lines according to the parse options.
#[derive(Debug, Clone, Copy, Default)]
pub struct FountainLineClassifier {
    trim_lines: bool,
}

impl FountainLineClassifier {
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            trim_lines: options.trim_lines,
        }
    }

    /// Classifies a line's text, trimming it first when configured to.
    pub fn classify_text(&self, text: &str) -> LineCategory {
        if self.trim_lines {
            classify(text.trim())
        } else {
            classify(text)
        }
    }

    pub fn classify(&self, line: &Line) -> ClassifiedLine {
        ClassifiedLine::new(line.index, self.classify_text(&line.text))
    }
}
