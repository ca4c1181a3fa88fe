//! # Snapshot Testing Support
//!
//! Utilities for testing the tokenizer via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: `dump` renders the stream as an indented listing for
//!   inline `insta` snapshots
//! - **`invariants`**: balance and level checks (every open has a matching
//!   close at the same level, every cell survives compaction balanced)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::dump;
