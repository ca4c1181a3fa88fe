//! # Inline Parsing
//!
//! Span-based inline parsing of cell and paragraph text, used when
//! rendering.
//!
//! The table scanner's inline skippers double as the recognizers here, so a
//! pipe the scanner treated as code is also rendered as code:
//! - Code spans suppress all other inline parsing inside them
//! - `$...$` math spans are parsed only outside code spans
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Math)
//! - **`kinds`**: inline types with owned delimiters (CodeSpan, MathSpan, TemplateVar)
//! - **`parser`**: `parse_inline()` entry point

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
