pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineIndex, LineMarks, LineRef, LineView, Position, Region, lines_with_spans};
pub use slice::{preview, slice};
pub use span::Span;
