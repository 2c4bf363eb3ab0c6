use serde::{Deserialize, Serialize};

/// Where regions still open at end of input are closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingEnd {
    /// Close at the last line number. A region whose only interior line is
    /// the last line therefore spans nothing and is dropped.
    #[default]
    LineCount,
    /// Close one past the last line, matching how regions closed mid-scan
    /// stop at the line that closed them.
    PastEnd,
}

/// Knobs for a parse pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Classify each line after trimming surrounding whitespace.
    pub trim_lines: bool,
    pub trailing_end: TrailingEnd,
}
