//! # Extended Tables
//!
//! The `#| ... |#` block grammar rule.
//!
//! ## Pipeline
//!
//! 1. **Scan** (`scan`): one forward pass with a [`cursor::Cursor`] records
//!    row and cell boundaries, treating fenced code/math, template variables,
//!    inline code/math and nested tables as opaque
//! 2. **Build** (`build`): emits `table`/`tbody`/`tr`/`td` tokens, handing each
//!    cell's range back to the host tokenizer through a narrowed view
//! 3. **Resolve spans** (`spans`): `>` and `^` sentinel cells become
//!    `colspan`/`rowspan` on the cell they extend
//! 4. **Compact** (`compact`): sentinel cells are filtered out of the stream
//!
//! `rule` ties these together behind the host's can-start / probe / parse
//! contract.
//!
//! ## Modules
//!
//! - **`cursor`**: line-aware byte cursor
//! - **`detect`**: fence, row and cell marker detectors
//! - **`skip`**: inline code and inline math skippers

pub mod build;
pub mod compact;
pub mod cursor;
pub mod detect;
pub mod rule;
pub mod scan;
pub mod skip;
pub mod spans;

pub use build::{BuiltTable, ContentMap, build_table};
pub use compact::compact;
pub use scan::{CellSpan, Row, TableScan, scan_table};
pub use spans::{SpanPlan, resolve_spans};
