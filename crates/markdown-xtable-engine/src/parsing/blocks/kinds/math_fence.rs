/// `$$`-delimited display math block.
pub struct MathFence;

impl MathFence {
    pub const DELIM: &'static str = "$$";

    pub fn opens(remainder: &str) -> bool {
        remainder.starts_with(Self::DELIM)
    }

    /// Body of a block opened and closed on the same line (`$$ x $$`).
    pub fn single_line(remainder: &str) -> Option<&str> {
        let body = remainder.strip_prefix(Self::DELIM)?;
        let close = body.find(Self::DELIM)?;
        Some(&body[..close])
    }

    pub fn closes(remainder: &str) -> bool {
        remainder.trim_end().starts_with(Self::DELIM)
    }
}
