//! # Block Tokenization
//!
//! A line-range tokenizer producing the flat element stream.
//!
//! ## Modules
//!
//! - **`kinds`**: block types with owned delimiters (ExtendedTable, CodeFence,
//!   MathFence, BlockQuote); paragraphs are the fallback and own none
//! - **`open`**: `try_open_leaf` dispatch for leaf block openers
//! - **`emitter`**: token and diagnostic sink
//! - **`tokenizer`**: the [`BlockTokenize`] seam and the host [`BlockTokenizer`]
//!
//! ## Key Invariants
//!
//! - Every call works on an explicit `[start_line, end_line)` range and a
//!   [`LineView`](crate::parsing::rope::LineView) passed by value; nothing is
//!   overridden in place
//! - Fenced code blocks are raw zones: no block parsing inside
//! - Open and close tokens of one element share the same level
//! - No container opens at or past the nesting limit; deeper text becomes a
//!   paragraph with a `YFM-NESTING-TOO-DEEP` diagnostic

pub mod emitter;
pub mod kinds;
pub mod open;
pub mod tokenizer;

pub use emitter::Emitter;
pub use open::{BlockOpen, try_open_leaf};
pub use tokenizer::{BlockTokenize, BlockTokenizer, DEFAULT_MAX_NESTING};
