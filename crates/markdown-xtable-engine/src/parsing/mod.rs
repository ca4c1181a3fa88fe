pub mod attrs;
pub mod blocks;
pub mod diagnostic;
pub mod inline;
pub mod options;
pub mod render;
pub mod rope;
pub mod snapshot;
pub mod table;
pub mod tokens;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockTokenize, BlockTokenizer, Emitter};
use diagnostic::Diagnostic;
use options::TableOptions;
use rope::LineIndex;
use tokens::Token;

#[derive(Debug)]
pub struct ParsedDoc {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn parse_document(rope: &Rope, options: &TableOptions) -> ParsedDoc {
    let src = rope.slice_to_cow(..);
    let index = LineIndex::from_rope(rope);
    tokenize_all(&src, &index, options)
}

/// Convenience: parse a string without building a rope first.
pub fn parse_str(src: &str, options: &TableOptions) -> ParsedDoc {
    tokenize_all(src, &LineIndex::from_text(src), options)
}

fn tokenize_all(src: &str, index: &LineIndex, options: &TableOptions) -> ParsedDoc {
    let mut out = Emitter::new();
    BlockTokenizer::new(options).tokenize(index.view(src), 0, index.line_count(), 0, &mut out);
    log::debug!(
        "tokenized {} lines into {} tokens ({} diagnostics)",
        index.line_count(),
        out.tokens.len(),
        out.diagnostics.len()
    );
    ParsedDoc {
        tokens: out.tokens,
        diagnostics: out.diagnostics,
    }
}
