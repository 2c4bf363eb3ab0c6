//! # Region Building
//!
//! Phase 2 of parsing: one forward scan over classified lines, running two
//! independent trackers (scene and dialogue block). Each tracker is either
//! closed or open at the line that started it; closing emits a [`Region`].
//!
//! - **`types`**: `Region`, `RegionKind`, `FoldingRange`
//! - **`builder`**: `RegionBuilder` state machine and `build_regions`

pub mod builder;
pub mod types;

pub use builder::{RegionBuilder, build_regions};
pub use types::{FoldingRange, Region, RegionKind};
