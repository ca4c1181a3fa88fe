use std::fmt::Write;

use crate::parsing::tokens::{Nesting, Token};

/// One-line-per-token listing, indented by level.
///
/// ```text
/// table_open 0..3
///   tbody_open 0..3
///     tr_open 1..2
///       td_open 1..2 colspan="2"
///         paragraph_open 1..2
///           inline 1..2 "a"
/// ```
pub fn dump(tokens: &[Token]) -> String {
    let mut out = String::new();
    for t in tokens {
        let _ = write!(out, "{}{}", "  ".repeat(t.level), t.type_name());
        if let Some([start, end]) = t.map {
            let _ = write!(out, " {start}..{end}");
        }
        for (key, values) in t.attrs.iter() {
            let _ = write!(out, " {key}={:?}", values.join(" "));
        }
        if t.hidden {
            out.push_str(" hidden");
        }
        if t.nesting == Nesting::SelfClosing && !t.content.is_empty() {
            let _ = write!(out, " {:?}", t.content);
        }
        out.push('\n');
    }
    out
}
