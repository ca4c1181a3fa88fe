//! Lookahead recognizers for inline raw zones.
//!
//! Each skipper answers "does an inline code/math span start here, and how
//! far does it reach?" so the scanner can jump over it without reading its
//! interior as table delimiters. Both stop at `line_end`: inline spans never
//! cross a line in the table scan.

use crate::parsing::inline::kinds::{CodeSpan, MathSpan};

use super::detect::is_escaped;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skip {
    /// Offset just past the span's closing delimiter.
    pub end: usize,
    /// Distance from the start position to `end`.
    pub steps: usize,
}

impl Skip {
    fn to(pos: usize, end: usize) -> Self {
        Self {
            end,
            steps: end - pos,
        }
    }
}

fn tick_run(src: &[u8], from: usize, limit: usize) -> usize {
    src[from..limit]
        .iter()
        .take_while(|&&b| b == CodeSpan::TICK)
        .count()
}

/// Matches a backtick code span whose closing run has the same length as the
/// opening run. An unmatched opener is an ordinary character.
pub fn skip_inline_code(src: &[u8], pos: usize, line_end: usize) -> Option<Skip> {
    let limit = line_end.min(src.len());
    if pos >= limit || src[pos] != CodeSpan::TICK || is_escaped(src, pos) {
        return None;
    }

    let open = tick_run(src, pos, limit);
    let mut i = pos + open;
    while i < limit {
        if src[i] != CodeSpan::TICK {
            i += 1;
            continue;
        }
        let run = tick_run(src, i, limit);
        i += run;
        if run == open {
            return Some(Skip::to(pos, i));
        }
    }
    None
}

/// Matches `$...$` inline math.
///
/// The opener must be unescaped and followed by a non-space. `$$` is reported
/// as a two-byte skip and left to the fenced-math detector. The closer must be
/// unescaped, not preceded by whitespace and not followed by a digit, so that
/// prices like `$5 and $6` are left alone.
pub fn skip_inline_math(src: &[u8], pos: usize, line_end: usize) -> Option<Skip> {
    let limit = line_end.min(src.len());
    if pos >= limit || src[pos] != MathSpan::DOLLAR || is_escaped(src, pos) {
        return None;
    }

    let next = *src.get(pos + 1).filter(|_| pos + 1 < limit)?;
    if next.is_ascii_whitespace() {
        return None;
    }
    if next == MathSpan::DOLLAR {
        return Some(Skip::to(pos, pos + 2));
    }

    (pos + 2..limit)
        .find(|&i| {
            src[i] == MathSpan::DOLLAR
                && !is_escaped(src, i)
                && !src[i - 1].is_ascii_whitespace()
                && !src.get(i + 1).is_some_and(u8::is_ascii_digit)
        })
        .map(|i| Skip::to(pos, i + 1))
}
