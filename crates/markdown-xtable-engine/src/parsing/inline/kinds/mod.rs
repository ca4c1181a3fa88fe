//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'`
//! - **`MathSpan`**: `DOLLAR = b'$'`
//! - **`TemplateVar`**: `OPEN = b"{{"`, `CLOSE = b"}}"`
//!
//! The table scanner and the inline parser both read these constants; neither
//! hardcodes a delimiter.

pub mod code_span;
pub mod math_span;
pub mod template_var;

pub use code_span::CodeSpan;
pub use math_span::MathSpan;
pub use template_var::TemplateVar;
