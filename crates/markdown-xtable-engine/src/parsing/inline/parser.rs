use crate::parsing::{
    inline::kinds::CodeSpan,
    rope::Span,
    table::skip::{skip_inline_code, skip_inline_math},
};

use super::types::InlineNode;

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// `base` is the offset at which `s` begins; all spans are absolute. Code
/// spans are tried before math, so `` `$x$` `` is a single code span. A `$$`
/// pair is left as text.
///
/// The returned nodes cover the entire input.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let b = s.as_bytes();
    let mut out = vec![];
    let mut text_start = 0usize;
    let mut i = 0usize;

    let flush_text = |out: &mut Vec<InlineNode>, start: usize, end: usize| {
        if end > start {
            out.push(InlineNode::Text(Span::new(base + start, base + end)));
        }
    };

    while i < b.len() {
        if let Some(skip) = skip_inline_code(b, i, b.len()) {
            let ticks = b[i..].iter().take_while(|&&c| c == CodeSpan::TICK).count();
            flush_text(&mut out, text_start, i);
            out.push(InlineNode::CodeSpan {
                full: Span::new(base + i, base + skip.end),
                inner: Span::new(base + i + ticks, base + skip.end - ticks),
            });
            i = skip.end;
            text_start = i;
            continue;
        }
        if let Some(skip) = skip_inline_math(b, i, b.len()) {
            if skip.steps > 2 {
                flush_text(&mut out, text_start, i);
                out.push(InlineNode::Math {
                    full: Span::new(base + i, base + skip.end),
                    inner: Span::new(base + i + 1, base + skip.end - 1),
                });
                text_start = skip.end;
            }
            i = skip.end;
            continue;
        }
        i += 1;
    }

    flush_text(&mut out, text_start, b.len());
    out
}
