use super::attributes::Attributes;

/// The element kind a token opens, closes, or stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Table,
    Tbody,
    Tr,
    Td,
    Paragraph,
    /// Inline text of the enclosing block; `content` holds the raw text.
    Inline,
    BlockQuote,
    /// Fenced code block; `content` is the code, `info` the info string.
    Fence,
    /// `$$`-fenced math block.
    MathBlock,
    /// Hidden, non-rendering marker carrying a diagnostic code in `content`.
    Diagnostic,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Table => "table",
            TokenKind::Tbody => "tbody",
            TokenKind::Tr => "tr",
            TokenKind::Td => "td",
            TokenKind::Paragraph => "paragraph",
            TokenKind::Inline => "inline",
            TokenKind::BlockQuote => "blockquote",
            TokenKind::Fence => "fence",
            TokenKind::MathBlock => "math_block",
            TokenKind::Diagnostic => "diagnostic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    Open,
    Close,
    SelfClosing,
}

/// One entry of the flat element stream handed back to the host.
///
/// Containers are represented as an `Open` token and a `Close` token carrying
/// the same `kind` and `level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub nesting: Nesting,
    /// Nesting depth; an open token and its close share the same level.
    pub level: usize,
    /// Source line range `[start, end)` when known.
    pub map: Option<[usize; 2]>,
    pub attrs: Attributes,
    pub content: String,
    /// Delimiter text the token was recognised by (`>`, ```` ``` ````, ...).
    pub markup: String,
    pub info: String,
    pub hidden: bool,
}

impl Token {
    pub fn new(kind: TokenKind, nesting: Nesting, level: usize) -> Self {
        Self {
            kind,
            nesting,
            level,
            map: None,
            attrs: Attributes::new(),
            content: String::new(),
            markup: String::new(),
            info: String::new(),
            hidden: false,
        }
    }

    pub fn open(kind: TokenKind, level: usize) -> Self {
        Self::new(kind, Nesting::Open, level)
    }

    pub fn close(kind: TokenKind, level: usize) -> Self {
        Self::new(kind, Nesting::Close, level)
    }

    pub fn leaf(kind: TokenKind, level: usize) -> Self {
        Self::new(kind, Nesting::SelfClosing, level)
    }

    #[must_use]
    pub fn with_map(mut self, start: usize, end: usize) -> Self {
        self.map = Some([start, end]);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = markup.into();
        self
    }

    pub fn is_open(&self, kind: TokenKind) -> bool {
        self.kind == kind && self.nesting == Nesting::Open
    }

    pub fn is_close(&self, kind: TokenKind) -> bool {
        self.kind == kind && self.nesting == Nesting::Close
    }

    /// Stream name in the `paragraph_open` / `paragraph_close` / `inline`
    /// convention.
    pub fn type_name(&self) -> String {
        match self.nesting {
            Nesting::Open => format!("{}_open", self.kind.name()),
            Nesting::Close => format!("{}_close", self.kind.name()),
            Nesting::SelfClosing => self.kind.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_follow_nesting() {
        assert_eq!(Token::open(TokenKind::Td, 3).type_name(), "td_open");
        assert_eq!(Token::close(TokenKind::Tr, 2).type_name(), "tr_close");
        assert_eq!(Token::leaf(TokenKind::MathBlock, 0).type_name(), "math_block");
    }

    #[test]
    fn builders_fill_fields() {
        let t = Token::leaf(TokenKind::Fence, 1)
            .with_map(4, 7)
            .with_content("let x = 1;\n")
            .with_markup("```");
        assert_eq!(t.map, Some([4, 7]));
        assert_eq!(t.markup, "```");
        assert!(!t.is_open(TokenKind::Fence));
    }
}
