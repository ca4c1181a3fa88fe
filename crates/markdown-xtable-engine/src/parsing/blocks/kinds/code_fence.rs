#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn markup(self) -> &'static str {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICKS,
            FenceKind::Tildes => CodeFence::TILDES,
        }
    }
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Fence signature of a line given from its indent start.
    pub fn sig(remainder: &str) -> Option<FenceSig> {
        let t = remainder.trim_end_matches(['\r', '\n']);
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks => FenceKind::Backticks,
            FenceSig::Tildes => FenceKind::Tildes,
        }
    }

    pub fn closes(kind: FenceKind, sig: Option<FenceSig>) -> bool {
        matches!(
            (kind, sig),
            (FenceKind::Backticks, Some(FenceSig::Backticks))
                | (FenceKind::Tildes, Some(FenceSig::Tildes))
        )
    }

    /// Info string after the opening fence characters.
    pub fn info(opener: &str, kind: FenceKind) -> &str {
        let fence = match kind {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        };
        opener.trim_start_matches(fence).trim()
    }
}
