/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips a single blockquote prefix from a line given from its indent
    /// start, returning the byte offset where the quoted content begins.
    ///
    /// One space after `>` belongs to the prefix; nested quotes (`> >`) keep
    /// their inner `>` so the body can be tokenized recursively.
    pub fn strip_one(s: &str) -> Option<usize> {
        let rest = s.strip_prefix(Self::PREFIX)?;
        Some(if rest.starts_with(' ') { 2 } else { 1 })
    }
}
