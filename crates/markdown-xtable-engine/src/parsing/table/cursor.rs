use crate::parsing::rope::{LineView, Position};

/// A forward-only, line-aware cursor over the source buffer.
///
/// Advancing past the end offset of the current line moves to the start
/// offset of the next line as reported by the [`LineView`], so prefixes
/// stripped by the view (a blockquote's `>`, a cell's leading marker) are
/// never visited.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    view: LineView<'a>,
    /// Exclusive line bound; the cursor is exhausted once it reaches it.
    end_line: usize,
    pos: usize,
    line: usize,
    line_end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(view: LineView<'a>, start: Position, end_line: usize) -> Self {
        Self {
            view,
            end_line,
            pos: start.offset,
            line: start.line,
            line_end: view.end(start.line),
        }
    }

    /// Absolute byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// End offset of the current line.
    pub fn line_end(&self) -> usize {
        self.line_end
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.pos)
    }

    pub fn is_exhausted(&self) -> bool {
        self.line >= self.end_line
    }

    /// True when the cursor sits on the current line's terminator.
    pub fn at_line_end(&self) -> bool {
        self.pos >= self.line_end
    }

    /// Current byte, or `None` once exhausted or past the buffer.
    pub fn peek(&self) -> Option<u8> {
        if self.is_exhausted() {
            return None;
        }
        self.view.bytes().get(self.pos).copied()
    }

    /// The buffer cut at the current line's end.
    ///
    /// Detectors and skippers match against this slice, so no delimiter can
    /// straddle a line terminator or reach past a region's last line.
    pub fn line_bytes(&self) -> &'a [u8] {
        let bytes = self.view.bytes();
        &bytes[..self.line_end.min(bytes.len())]
    }

    /// Moves forward `steps` bytes, wrapping to the next line whenever the
    /// offset passes the current line's end.
    pub fn advance(&mut self, steps: usize) {
        for _ in 0..steps {
            if self.is_exhausted() {
                return;
            }
            self.pos += 1;
            if self.pos > self.line_end {
                self.line += 1;
                if self.is_exhausted() {
                    return;
                }
                self.pos = self.view.begin(self.line).max(self.pos);
                self.line_end = self.view.end(self.line);
            }
        }
    }
}
