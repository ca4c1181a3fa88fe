pub mod block_quote;
pub mod code_fence;
pub mod math_fence;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use math_fence::MathFence;
pub use table::ExtendedTable;
