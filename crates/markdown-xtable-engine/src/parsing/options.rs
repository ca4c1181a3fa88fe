use serde::{Deserialize, Serialize};

/// Switches for the nesting-awareness rules of the table scanner.
///
/// Each flag independently decides whether cell and row markers inside the
/// corresponding construct are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// ```` ``` ```` fenced code blocks.
    #[serde(alias = "table_ignoreSplittersInBlockCode")]
    pub ignore_splitters_in_block_code: bool,
    /// `$$` fenced math blocks.
    #[serde(alias = "table_ignoreSplittersInBlockMath")]
    pub ignore_splitters_in_block_math: bool,
    /// `` `code` `` spans.
    #[serde(alias = "table_ignoreSplittersInInlineCode")]
    pub ignore_splitters_in_inline_code: bool,
    /// `$math$` spans.
    #[serde(alias = "table_ignoreSplittersInInlineMath")]
    pub ignore_splitters_in_inline_math: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            ignore_splitters_in_block_code: true,
            ignore_splitters_in_block_math: false,
            ignore_splitters_in_inline_code: false,
            ignore_splitters_in_inline_math: false,
        }
    }
}

impl TableOptions {
    /// Every nesting-awareness rule enabled.
    pub fn all() -> Self {
        Self {
            ignore_splitters_in_block_code: true,
            ignore_splitters_in_block_math: true,
            ignore_splitters_in_inline_code: true,
            ignore_splitters_in_inline_math: true,
        }
    }
}
