use super::span::Span;

/// Borrows the text for a span, clamping both ends to the buffer.
///
/// Spans produced by the scanner always sit on ASCII delimiters, so the
/// clamped range is a valid char boundary in practice. A span that is not is
/// returned as an empty string rather than panicking.
pub fn slice(src: &str, sp: Span) -> &str {
    let end = sp.end.min(src.len());
    let start = sp.start.min(end);
    src.get(start..end).unwrap_or("")
}

/// Truncates `text` to at most `max` bytes with a "..." suffix if needed.
///
/// Used for human-readable snapshot output.
pub fn preview(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut s = text[..cut].to_string();
    s.push_str("...");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn preview_exact_length_unchanged() {
        assert_eq!(preview("hello", 5), "hello");
    }

    #[test]
    fn preview_truncates_long_text() {
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn preview_backs_off_to_char_boundary() {
        // 'é' is two bytes; cutting at 2 would split it
        assert_eq!(preview("aé b", 2), "a...");
    }

    #[test]
    fn slice_partial_span() {
        assert_eq!(slice("hello world", Span::new(6, 11)), "world");
    }

    #[test]
    fn slice_clamps_out_of_range() {
        assert_eq!(slice("hello", Span::new(3, 50)), "lo");
        assert_eq!(slice("hello", Span::new(9, 50)), "");
    }
}
