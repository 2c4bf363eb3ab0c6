use std::fmt;

use serde::Serialize;

/// What a folding region groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RegionKind {
    /// The lines after a scene heading, up to the next heading.
    Scene,
    /// The lines after a character cue, up to the next cue or blank line.
    DialogueBlock,
}

/// A closed, collapsible line range.
///
/// `start` is the first line inside the region (the line after the heading
/// or cue that opened it) and `end` is the line that closed it. Both are
/// 1-based line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub start: usize,
    pub end: usize,
    pub kind: RegionKind,
}

impl Region {
    pub fn new(start: usize, end: usize, kind: RegionKind) -> Self {
        Self { start, end, kind }
    }

    /// Number of lines between `start` and `end`. Saturates at zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the region spans no lines (start >= end).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the 1-based line `index` lies in `start..end`.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// The `(startLine, endLine)` pair handed to an editor's folding UI.
    pub fn folding_range(&self) -> FoldingRange {
        FoldingRange {
            start_line: self.start,
            end_line: self.end,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}..{}", self.kind, self.start, self.end)
    }
}

/// A foldable line range as consumed by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldingRange {
    pub start_line: usize,
    pub end_line: usize,
}
