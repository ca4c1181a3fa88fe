use std::fmt;

use super::tokens::{Token, TokenKind};

/// Conditions reported while tokenizing; none of them abort the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// `#|` opened but no matching `|#` before the end of the region.
    UnterminatedTable,
    /// Containers nested past the tokenizer's limit; the rest of the range is
    /// kept as plain text.
    NestingTooDeep,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::UnterminatedTable => "YFM-TABLE-UNTERMINATED",
            DiagnosticCode::NestingTooDeep => "YFM-NESTING-TOO-DEEP",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DiagnosticCode::UnterminatedTable => "table opened with '#|' is never closed with '|#'",
            DiagnosticCode::NestingTooDeep => {
                "blocks nested too deeply; remaining text kept as a paragraph"
            }
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    /// Affected source lines `[start, end)`.
    pub lines: [usize; 2],
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, start: usize, end: usize) -> Self {
        Self {
            code,
            lines: [start, end],
        }
    }

    /// The hidden marker token placed in the element stream.
    pub fn marker(&self, level: usize) -> Token {
        let mut token = Token::leaf(TokenKind::Diagnostic, level)
            .with_map(self.lines[0], self.lines[1])
            .with_content(self.code.as_str());
        token.hidden = true;
        token
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} {}",
            self.lines[0] + 1,
            self.code,
            self.code.message()
        )
    }
}
