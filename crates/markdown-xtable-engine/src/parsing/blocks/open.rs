use super::kinds::{BlockQuote, CodeFence, FenceKind, MathFence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { kind: FenceKind },
    MathBlock,
    BlockQuote,
}

/// Detects a non-table block opener on a line given from its indent start.
///
/// Tables are matched separately because recognising one requires scanning
/// ahead for the closing fence.
pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen> {
    // Precedence: fence beats everything else.
    if let Some(sig) = CodeFence::sig(remainder) {
        return Some(BlockOpen::FencedCode {
            kind: CodeFence::kind(sig),
        });
    }
    if MathFence::opens(remainder) {
        return Some(BlockOpen::MathBlock);
    }
    if BlockQuote::strip_one(remainder).is_some() {
        return Some(BlockOpen::BlockQuote);
    }
    None
}
