//! # Parsing
//!
//! Text buffer → lines → categories → folding regions.
//!
//! 1. **`rope`**: splits the buffer into numbered [`Line`]s with byte spans
//! 2. **`classify`**: assigns each line a [`LineCategory`]
//! 3. **`regions`**: scans the classified lines once and emits [`Region`]s
//!
//! The whole document is re-parsed on every call; nothing is cached between
//! passes, so the result depends only on the text and the options.

pub mod classify;
pub mod options;
pub mod regions;
pub mod rope;
pub mod snapshot;

use xi_rope::Rope;

use classify::{ClassifiedLine, FountainLineClassifier, LineCategory};
use regions::{FoldingRange, Region, RegionBuilder, RegionKind};
use rope::{Line, split_lines};

pub use options::{ParseOptions, TrailingEnd};

/// The result of one parse pass.
#[derive(Debug, Clone)]
pub struct ParsedScript {
    pub lines: Vec<Line>,
    /// Category of each line, parallel to `lines`.
    pub categories: Vec<LineCategory>,
    /// Regions in the order they closed.
    pub regions: Vec<Region>,
}

impl ParsedScript {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Category of the 1-based line `index`, if it exists.
    pub fn category_of(&self, index: usize) -> Option<LineCategory> {
        index
            .checked_sub(1)
            .and_then(|i| self.categories.get(i))
            .copied()
    }

    pub fn classified(&self) -> impl Iterator<Item = ClassifiedLine> + '_ {
        self.lines
            .iter()
            .zip(&self.categories)
            .map(|(line, category)| ClassifiedLine::new(line.index, *category))
    }

    pub fn regions_of(&self, kind: RegionKind) -> impl Iterator<Item = &Region> + '_ {
        self.regions.iter().filter(move |r| r.kind == kind)
    }

    /// The scene region covering the 1-based line `index`.
    ///
    /// Heading lines sit outside their own scene, since a scene starts on
    /// the line after its heading.
    pub fn scene_containing(&self, index: usize) -> Option<&Region> {
        self.regions_of(RegionKind::Scene).find(|r| r.contains(index))
    }

    pub fn folding_ranges(&self) -> Vec<FoldingRange> {
        self.regions.iter().map(Region::folding_range).collect()
    }
}

pub fn parse_document(rope: &Rope, options: &ParseOptions) -> ParsedScript {
    let classifier = FountainLineClassifier::new(options);
    let mut builder = RegionBuilder::with_options(options);

    let lines = split_lines(rope);
    let mut categories = Vec::with_capacity(lines.len());

    for line in &lines {
        let classified = classifier.classify(line);
        builder.step(classified);
        categories.push(classified.category);
    }

    let regions = builder.finish();
    log::debug!(
        "parsed {} lines into {} regions",
        lines.len(),
        regions.len()
    );

    ParsedScript {
        lines,
        categories,
        regions,
    }
}

/// Convenience: parse a string slice.
pub fn parse_str(text: &str, options: &ParseOptions) -> ParsedScript {
    parse_document(&Rope::from(text), options)
}
