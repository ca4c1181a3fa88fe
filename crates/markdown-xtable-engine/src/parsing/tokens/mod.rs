//! # Element Stream
//!
//! The flat open/close token stream produced by block tokenization. Tables,
//! rows and cells are emitted as paired `Open`/`Close` tokens at matching
//! levels; leaf blocks (fences, math) are `SelfClosing`.

pub mod attributes;
pub mod token;

pub use attributes::{Attributes, FLAGS_KEY};
pub use token::{Nesting, Token, TokenKind};
