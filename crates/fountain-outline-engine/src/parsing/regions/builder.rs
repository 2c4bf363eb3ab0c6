use crate::{
    error::ParseError,
    parsing::{
        ParseOptions, TrailingEnd,
        classify::{ClassifiedLine, LineCategory},
    },
};

use super::types::{Region, RegionKind};

/// State of one region tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum OpenRegion {
    #[default]
    Closed,
    /// Opened by the heading or cue on this line.
    OpenAt(usize),
}

/// Single-pass state machine turning classified lines into regions.
///
/// Regions are emitted in the order they close, so scenes and dialogue
/// blocks interleave. Regions spanning no lines are dropped.
pub struct RegionBuilder {
    scene: OpenRegion,
    dialogue: OpenRegion,
    line_count: usize,
    trailing_end: TrailingEnd,
    out: Vec<Region>,
}

impl RegionBuilder {
    pub fn new() -> Self {
        Self::with_options(&ParseOptions::default())
    }

    pub fn with_options(options: &ParseOptions) -> Self {
        Self {
            scene: OpenRegion::Closed,
            dialogue: OpenRegion::Closed,
            line_count: 0,
            trailing_end: options.trailing_end,
            out: vec![],
        }
    }

    /// Feeds the next line. Lines must arrive numbered 1, 2, 3, ...
    pub fn push(&mut self, line: ClassifiedLine) -> Result<(), ParseError> {
        let expected = self.line_count + 1;
        if line.index != expected {
            return Err(ParseError::InvalidInputSequence {
                position: self.line_count,
                expected,
                found: line.index,
            });
        }
        self.step(line);
        Ok(())
    }

    /// Advances the scan without checking the index; callers that number
    /// lines themselves use this.
    pub(crate) fn step(&mut self, line: ClassifiedLine) {
        let i = line.index;
        self.line_count = i;

        match line.category {
            LineCategory::SceneHeading => {
                self.close(RegionKind::Scene, i);
                self.scene = OpenRegion::OpenAt(i);
            }
            LineCategory::Character => {
                self.close(RegionKind::DialogueBlock, i);
                self.dialogue = OpenRegion::OpenAt(i);
            }
            LineCategory::Blank => {
                self.close(RegionKind::DialogueBlock, i);
            }
            // Everything else, comments included, is interior to whatever is open.
            _ => {}
        }
    }

    pub fn finish(mut self) -> Vec<Region> {
        // EOF flush
        let end = match self.trailing_end {
            TrailingEnd::LineCount => self.line_count,
            TrailingEnd::PastEnd => self.line_count + 1,
        };
        self.close(RegionKind::Scene, end);
        self.close(RegionKind::DialogueBlock, end);
        self.out
    }

    fn close(&mut self, kind: RegionKind, end: usize) {
        let tracker = match kind {
            RegionKind::Scene => &mut self.scene,
            RegionKind::DialogueBlock => &mut self.dialogue,
        };
        if let OpenRegion::OpenAt(opened) = std::mem::take(tracker) {
            self.emit(Region::new(opened + 1, end, kind));
        }
    }

    fn emit(&mut self, region: Region) {
        if region.is_empty() {
            log::trace!("dropping empty region {region}");
            return;
        }
        log::trace!("region {region}");
        self.out.push(region);
    }
}

impl Default for RegionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds regions for a whole classified sequence with default options.
///
/// Rejects sequences whose indices do not run 1, 2, 3, ... without gaps.
pub fn build_regions(lines: &[ClassifiedLine]) -> Result<Vec<Region>, ParseError> {
    let mut builder = RegionBuilder::new();
    for line in lines {
        builder.push(*line)?;
    }
    Ok(builder.finish())
}
