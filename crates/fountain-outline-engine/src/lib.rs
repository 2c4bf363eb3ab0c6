pub mod error;
pub mod parsing;

// Re-export key types for easier usage
pub use error::ParseError;
pub use parsing::{
    ParseOptions, ParsedScript, TrailingEnd,
    classify::{ClassifiedLine, FountainLineClassifier, LineCategory, classify},
    parse_document, parse_str,
    regions::{FoldingRange, Region, RegionBuilder, RegionKind, build_regions},
    rope::{Line, Span},
};
