use xi_rope::Rope;

use super::{slice::slice, span::Span};

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text as a string.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which is important for
/// accurate span tracking when building the [`LineIndex`].
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// A recorded location in the source: a line number and an absolute byte
/// offset that lies on (or one past) that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}

/// Per-line boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMarks {
    /// Offset of the first byte of the line.
    pub begin: usize,
    /// Offset of the first byte after leading spaces and tabs.
    pub indent: usize,
    /// Offset of the line terminator (`\n` or `\r\n`), or the buffer length
    /// for an unterminated last line.
    pub end: usize,
}

impl LineMarks {
    /// Marks for `src[begin..end]`, computing the indent start.
    pub fn within(src: &str, begin: usize, end: usize) -> Self {
        let bytes = src.as_bytes();
        let mut indent = begin;
        while indent < end && matches!(bytes.get(indent), Some(b' ' | b'\t')) {
            indent += 1;
        }
        Self { begin, indent, end }
    }

    fn from_line(begin: usize, text: &str) -> Self {
        let trimmed = text.trim_end_matches(['\r', '\n']);
        let end = begin + trimmed.len();
        let indent = begin + (trimmed.len() - trimmed.trim_start_matches([' ', '\t']).len());
        Self { begin, indent, end }
    }
}

/// Line boundary table for a whole document, built once per parse.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    marks: Vec<LineMarks>,
}

impl LineIndex {
    pub fn from_rope(rope: &Rope) -> Self {
        let marks = lines_with_spans(rope)
            .map(|lr| LineMarks::from_line(lr.span.start, &lr.text))
            .collect();
        Self { marks }
    }

    pub fn from_text(src: &str) -> Self {
        let mut marks = Vec::new();
        let mut begin = 0usize;
        for line in src.split_inclusive('\n') {
            marks.push(LineMarks::from_line(begin, line));
            begin += line.len();
        }
        Self { marks }
    }

    /// Number of lines (the host's `lineMax`).
    pub fn line_count(&self) -> usize {
        self.marks.len()
    }

    pub fn marks(&self, line: usize) -> Option<LineMarks> {
        self.marks.get(line).copied()
    }

    /// A view of the whole document over `src`, which must be the text the
    /// index was built from.
    pub fn view<'a>(&'a self, src: &'a str) -> LineView<'a> {
        LineView::new(src, &self.marks, 0)
    }
}

/// A half-open text range `[start, end)` given as two positions.
///
/// Passing a region to [`LineView::with_region`] makes the first line of the
/// region begin at `start.offset` and its last line end at `end.offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: Position,
    pub end: Position,
}

impl Region {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start.offset, self.end.offset)
    }

    /// Exclusive line bound, suitable as a tokenizer `end_line`.
    pub fn line_limit(&self) -> usize {
        self.end.line + 1
    }
}

/// Read-only access to line boundaries, optionally narrowed by a [`Region`].
///
/// Sub-tokenization of a table cell or a blockquote body receives its own
/// view by value instead of overriding the document's line table in place,
/// so sibling cells and the outer scan always see the original bounds.
#[derive(Debug, Clone, Copy)]
pub struct LineView<'a> {
    src: &'a str,
    marks: &'a [LineMarks],
    first_line: usize,
    region: Option<Region>,
}

impl<'a> LineView<'a> {
    /// `marks[0]` describes line number `first_line`.
    pub fn new(src: &'a str, marks: &'a [LineMarks], first_line: usize) -> Self {
        Self {
            src,
            marks,
            first_line,
            region: None,
        }
    }

    #[must_use]
    pub fn with_region(self, region: Region) -> Self {
        Self {
            region: Some(region),
            ..self
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    /// Exclusive upper bound of the line numbers this view describes.
    pub fn line_limit(&self) -> usize {
        self.first_line + self.marks.len()
    }

    fn raw(&self, line: usize) -> Option<LineMarks> {
        line.checked_sub(self.first_line)
            .and_then(|i| self.marks.get(i))
            .copied()
    }

    /// Start offset of `line`; the buffer length for lines outside the view.
    pub fn begin(&self, line: usize) -> usize {
        match self.region {
            Some(r) if r.start.line == line => r.start.offset,
            _ => self.raw(line).map_or(self.src.len(), |m| m.begin),
        }
    }

    /// Offset after leading indentation of `line`.
    pub fn indent(&self, line: usize) -> usize {
        let overridden = self.region.is_some_and(|r| r.start.line == line);
        match self.raw(line) {
            Some(m) if !overridden => m.indent.min(self.end(line)),
            _ => {
                let (begin, end) = (self.begin(line), self.end(line));
                let bytes = self.bytes();
                let mut i = begin;
                while i < end && matches!(bytes.get(i), Some(b' ' | b'\t')) {
                    i += 1;
                }
                i
            }
        }
    }

    /// End offset of `line` (its terminator position).
    pub fn end(&self, line: usize) -> usize {
        let end = match self.region {
            Some(r) if r.end.line == line => r.end.offset,
            _ => self.raw(line).map_or(self.src.len(), |m| m.end),
        };
        end.max(self.begin(line))
    }

    /// Line text from its begin offset, without the terminator.
    pub fn text(&self, line: usize) -> &'a str {
        slice(self.src, Span::new(self.begin(line), self.end(line)))
    }

    /// Line text after leading indentation.
    pub fn indented_text(&self, line: usize) -> &'a str {
        slice(self.src, Span::new(self.indent(line), self.end(line)))
    }

    pub fn is_blank(&self, line: usize) -> bool {
        self.indent(line) >= self.end(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn index_records_begin_indent_end() {
        let src = "#|\n  || a ||\n|#";
        let index = LineIndex::from_text(src);
        assert_eq!(index.line_count(), 3);
        assert_eq!(
            index.marks(1),
            Some(LineMarks {
                begin: 3,
                indent: 5,
                end: 12
            })
        );
        assert_eq!(index.marks(2).map(|m| m.end), Some(src.len()));
    }

    #[test]
    fn rope_and_str_indexes_agree() {
        let src = "one\r\ntwo\n\nthree\n";
        let rope = Rope::from(src);
        let a = LineIndex::from_rope(&rope);
        let b = LineIndex::from_text(src);
        assert_eq!(a.line_count(), 4);
        for line in 0..a.line_count() {
            assert_eq!(a.marks(line), b.marks(line));
        }
        // CRLF terminator is excluded from the line end
        assert_eq!(a.marks(0).map(|m| m.end), Some(3));
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(LineIndex::from_text("a\nb\n").line_count(), 2);
        assert_eq!(LineIndex::from_text("").line_count(), 0);
    }

    #[test]
    fn region_overrides_first_and_last_line() {
        let src = "|| a\nb ||\nc";
        let index = LineIndex::from_text(src);
        let region = Region::new(Position::new(0, 2), Position::new(1, 7));
        let view = index.view(src).with_region(region);

        assert_eq!(view.text(0), " a");
        assert_eq!(view.indented_text(0), "a");
        assert_eq!(view.text(1), "b ");
        // untouched line keeps its own bounds
        assert_eq!(view.text(2), "c");
        // the document view is unaffected
        assert_eq!(index.view(src).text(0), "|| a");
    }

    #[test]
    fn lines_outside_view_are_empty() {
        let src = "a\nb";
        let index = LineIndex::from_text(src);
        let view = index.view(src);
        assert_eq!(view.line_limit(), 2);
        assert_eq!(view.text(7), "");
        assert!(view.is_blank(7));
    }
}
