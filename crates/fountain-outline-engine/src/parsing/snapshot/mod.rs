//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! - **`normalize`**: renders a parse to a stable, line-oriented `Snap` for
//!   `insta` text snapshots
//! - **`invariants`**: runtime checks for parser correctness (line numbering,
//!   spans slicing back to text, region bounds, no overlap within a kind)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
