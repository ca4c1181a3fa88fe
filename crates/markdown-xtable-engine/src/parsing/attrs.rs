//! Attribute-string parsing for `{.class #id key=value flag}` fragments.
//!
//! Used for the text that follows a closing table fence and for trailing
//! class markers inside cells.

use std::sync::OnceLock;

use regex::Regex;

use super::tokens::Attributes;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttrError {
    #[error("attribute block is missing its closing '}}'")]
    Unclosed,
    #[error("unterminated quoted value for attribute '{key}'")]
    UnterminatedQuote { key: String },
    #[error("attribute value without a key at byte {offset}")]
    MissingKey { offset: usize },
    #[error("empty {kind} name at byte {offset}")]
    EmptyName { kind: &'static str, offset: usize },
}

/// Parses a `{...}` fragment or a bare token list into [`Attributes`].
///
/// - `.name` appends to `class`
/// - `#name` sets `id` (last one wins)
/// - `key=value`, `key="quoted value"`, `key='quoted'` append to `key`
/// - a bare word is recorded as a flag
///
/// Empty or whitespace-only input yields an empty mapping.
pub fn parse_attrs(text: &str) -> Result<Attributes, AttrError> {
    let trimmed = text.trim();
    let inner = match trimmed.strip_prefix('{') {
        Some(rest) => rest.strip_suffix('}').ok_or(AttrError::Unclosed)?,
        None => trimmed,
    };

    let b = inner.as_bytes();
    let mut attrs = Attributes::new();
    let mut i = 0usize;

    while i < b.len() {
        if b[i].is_ascii_whitespace() {
            i += 1;
            continue;
        }
        match b[i] {
            b'.' | b'#' => {
                let sigil = b[i];
                let start = i + 1;
                i = scan_name(b, start);
                if i == start {
                    let kind = if sigil == b'.' { "class" } else { "id" };
                    return Err(AttrError::EmptyName { kind, offset: start });
                }
                let name = &inner[start..i];
                if sigil == b'.' {
                    attrs.append("class", name);
                } else {
                    attrs.set("id", name);
                }
            }
            b'=' => return Err(AttrError::MissingKey { offset: i }),
            _ => {
                let start = i;
                i = scan_name(b, start);
                if i == start {
                    // stray quote or brace: skip it
                    i += 1;
                    continue;
                }
                let key = &inner[start..i];
                if b.get(i) != Some(&b'=') {
                    attrs.push_flag(key);
                    continue;
                }
                i += 1;
                let (value, next) = scan_value(inner, i).ok_or_else(|| {
                    AttrError::UnterminatedQuote {
                        key: key.to_string(),
                    }
                })?;
                attrs.append(key, value);
                i = next;
            }
        }
    }

    Ok(attrs)
}

fn scan_name(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && !matches!(b[i], b'=' | b'{' | b'}' | b'"' | b'\'' | b'.' | b'#')
        && !b[i].is_ascii_whitespace()
    {
        i += 1;
    }
    i
}

/// Returns the value starting at `i` and the offset just past it, or `None`
/// for an unterminated quote.
fn scan_value(s: &str, i: usize) -> Option<(&str, usize)> {
    let b = s.as_bytes();
    match b.get(i) {
        Some(&q @ (b'"' | b'\'')) => {
            let close = s[i + 1..].find(q as char)? + i + 1;
            Some((&s[i + 1..close], close + 1))
        }
        _ => {
            let mut end = i;
            while end < b.len() && !b[end].is_ascii_whitespace() {
                end += 1;
            }
            Some((&s[i..end], end))
        }
    }
}

fn trailing_attrs_regex() -> &'static Regex {
    static TRAILING: OnceLock<Regex> = OnceLock::new();
    TRAILING.get_or_init(|| {
        Regex::new(r"\s*(\{[^{}]*\})\s*$").expect("Invalid trailing attribute regex")
    })
}

/// Splits a trailing `{...}` fragment off `text`.
///
/// Returns the text before the fragment (trailing whitespace removed) and the
/// fragment itself, braces included. Template variables such as `{{ x }}` are
/// never mistaken for a fragment.
pub fn split_trailing_attrs(text: &str) -> Option<(&str, &str)> {
    let caps = trailing_attrs_regex().captures(text)?;
    let whole = caps.get(0)?;
    let fragment = caps.get(1)?;
    if text[..fragment.start()].ends_with('{') {
        return None;
    }
    Some((&text[..whole.start()], fragment.as_str()))
}
