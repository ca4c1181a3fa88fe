//! Fixed-sequence predicates evaluated at a byte offset.
//!
//! Every detector is pure: it reads `src` (already cut at the current line's
//! end by the caller) and never moves a cursor.

use crate::parsing::{
    blocks::kinds::{CodeFence, ExtendedTable, MathFence},
    inline::kinds::TemplateVar,
};

pub fn matches_at(src: &[u8], pos: usize, seq: &[u8]) -> bool {
    pos.checked_add(seq.len())
        .and_then(|end| src.get(pos..end))
        .is_some_and(|found| found == seq)
}

/// True when an odd number of backslashes immediately precedes `pos`.
pub fn is_escaped(src: &[u8], pos: usize) -> bool {
    let run = src[..pos.min(src.len())]
        .iter()
        .rev()
        .take_while(|&&b| b == ExtendedTable::ESCAPE)
        .count();
    run % 2 == 1
}

pub fn table_open(src: &[u8], pos: usize) -> bool {
    matches_at(src, pos, ExtendedTable::OPEN)
}

pub fn table_close(src: &[u8], pos: usize) -> bool {
    matches_at(src, pos, ExtendedTable::CLOSE)
}

pub fn row_marker(src: &[u8], pos: usize) -> bool {
    matches_at(src, pos, ExtendedTable::ROW) && !is_escaped(src, pos)
}

/// A lone `|`. Never fires on the first character of `||`.
pub fn cell_marker(src: &[u8], pos: usize) -> bool {
    src.get(pos) == Some(&ExtendedTable::CELL) && !is_escaped(src, pos) && !row_marker(src, pos)
}

pub fn code_fence(src: &[u8], pos: usize) -> bool {
    matches_at(src, pos, CodeFence::BACKTICKS.as_bytes())
}

pub fn math_fence(src: &[u8], pos: usize) -> bool {
    matches_at(src, pos, MathFence::DELIM.as_bytes())
}

pub fn template_open(src: &[u8], pos: usize) -> bool {
    matches_at(src, pos, TemplateVar::OPEN)
}

pub fn template_close(src: &[u8], pos: usize) -> bool {
    matches_at(src, pos, TemplateVar::CLOSE)
}
