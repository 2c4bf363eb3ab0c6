pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{Line, split_lines};
pub use slice::{preview, slice_to_string};
pub use span::Span;
