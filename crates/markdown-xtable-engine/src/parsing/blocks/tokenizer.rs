use crate::parsing::{
    diagnostic::{Diagnostic, DiagnosticCode},
    options::TableOptions,
    rope::{LineMarks, LineView},
    table,
    tokens::{Token, TokenKind},
};

use super::{
    emitter::Emitter,
    kinds::{BlockQuote, CodeFence, ExtendedTable, FenceKind, MathFence},
    open::{BlockOpen, try_open_leaf},
};

/// Recursive block tokenization over an explicit line range.
///
/// The table builder calls back into this for every cell, passing a view
/// narrowed to the cell's region.
pub trait BlockTokenize {
    fn tokenize(
        &self,
        view: LineView<'_>,
        start_line: usize,
        end_line: usize,
        level: usize,
        out: &mut Emitter,
    );
}

/// Deepest token level a container may open at. Each nested table costs four
/// levels (table, tbody, tr, td) and each quote one.
pub const DEFAULT_MAX_NESTING: usize = 100;

/// The host grammar: extended tables, fenced code, fenced math, blockquotes
/// and paragraphs.
#[derive(Debug, Clone, Copy)]
pub struct BlockTokenizer<'o> {
    options: &'o TableOptions,
    max_nesting: usize,
}

impl<'o> BlockTokenizer<'o> {
    pub fn new(options: &'o TableOptions) -> Self {
        Self {
            options,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Tokenizes the block starting at non-blank `line`, returning the first
    /// line after it.
    fn block(
        &self,
        view: LineView<'_>,
        line: usize,
        end: usize,
        level: usize,
        out: &mut Emitter,
    ) -> usize {
        if level >= self.max_nesting {
            return self.too_deep(view, line, end, level, out);
        }

        if let Some(next) = table::rule::parse(self, view, line, end, level, self.options, out) {
            return next.max(line + 1);
        }

        match try_open_leaf(view.indented_text(line)) {
            Some(BlockOpen::FencedCode { kind }) => self.fence(view, line, end, level, kind, out),
            Some(BlockOpen::MathBlock) => self.math(view, line, end, level, out),
            Some(BlockOpen::BlockQuote) => self.quote(view, line, end, level, out),
            None => self.paragraph(view, line, end, level, out),
        }
    }

    fn fence(
        &self,
        view: LineView<'_>,
        line: usize,
        end: usize,
        level: usize,
        kind: FenceKind,
        out: &mut Emitter,
    ) -> usize {
        let info = CodeFence::info(view.indented_text(line), kind);
        let mut body = String::new();
        let mut next = line + 1;
        let mut closed = false;

        while next < end {
            if CodeFence::closes(kind, CodeFence::sig(view.indented_text(next))) {
                closed = true;
                break;
            }
            body.push_str(view.text(next));
            body.push('\n');
            next += 1;
        }
        // Unterminated fence: runs to the end of the range
        let after = if closed { next + 1 } else { end };

        let mut token = Token::leaf(TokenKind::Fence, level)
            .with_map(line, after)
            .with_content(body)
            .with_markup(kind.markup());
        token.info = info.to_string();
        out.push(token);
        after
    }

    fn math(
        &self,
        view: LineView<'_>,
        line: usize,
        end: usize,
        level: usize,
        out: &mut Emitter,
    ) -> usize {
        let opener = view.indented_text(line);
        if let Some(body) = MathFence::single_line(opener) {
            out.push(
                Token::leaf(TokenKind::MathBlock, level)
                    .with_map(line, line + 1)
                    .with_content(body.trim())
                    .with_markup(MathFence::DELIM),
            );
            return line + 1;
        }

        let mut body = String::new();
        let mut next = line + 1;
        while next < end && !MathFence::closes(view.indented_text(next)) {
            body.push_str(view.text(next));
            body.push('\n');
            next += 1;
        }
        let after = (next + 1).min(end.max(line + 1));

        out.push(
            Token::leaf(TokenKind::MathBlock, level)
                .with_map(line, after)
                .with_content(body)
                .with_markup(MathFence::DELIM),
        );
        after
    }

    fn quote(
        &self,
        view: LineView<'_>,
        line: usize,
        end: usize,
        level: usize,
        out: &mut Emitter,
    ) -> usize {
        let mut marks = Vec::new();
        let mut next = line;
        while next < end {
            let Some(skip) = BlockQuote::strip_one(view.indented_text(next)) else {
                break;
            };
            let begin = (view.indent(next) + skip).min(view.end(next));
            marks.push(LineMarks::within(view.src(), begin, view.end(next)));
            next += 1;
        }

        out.push(
            Token::open(TokenKind::BlockQuote, level)
                .with_map(line, next)
                .with_markup(BlockQuote::PREFIX.to_string()),
        );
        let inner = LineView::new(view.src(), &marks, line);
        self.tokenize(inner, line, next, level + 1, out);
        out.push(
            Token::close(TokenKind::BlockQuote, level).with_markup(BlockQuote::PREFIX.to_string()),
        );
        next
    }

    /// Past the nesting limit: the rest of the range is kept as one plain
    /// paragraph and no container is opened.
    fn too_deep(
        &self,
        view: LineView<'_>,
        line: usize,
        end: usize,
        level: usize,
        out: &mut Emitter,
    ) -> usize {
        out.diagnose(Diagnostic::new(DiagnosticCode::NestingTooDeep, line, end), level);
        self.emit_paragraph(view, line, end, level, out);
        end
    }

    fn paragraph(
        &self,
        view: LineView<'_>,
        line: usize,
        end: usize,
        level: usize,
        out: &mut Emitter,
    ) -> usize {
        let mut closes = CloseFenceLimit::default();
        let mut next = line + 1;
        while next < end && !self.interrupts_paragraph(view, next, end, &mut closes) {
            next += 1;
        }
        self.emit_paragraph(view, line, next, level, out);
        next
    }

    fn emit_paragraph(
        &self,
        view: LineView<'_>,
        line: usize,
        next: usize,
        level: usize,
        out: &mut Emitter,
    ) {
        let content = (line..next)
            .map(|l| view.indented_text(l).trim_end())
            .collect::<Vec<_>>()
            .join("\n");

        out.push(Token::open(TokenKind::Paragraph, level).with_map(line, next));
        out.push(
            Token::leaf(TokenKind::Inline, level + 1)
                .with_map(line, next)
                .with_content(content.trim()),
        );
        out.push(Token::close(TokenKind::Paragraph, level));
    }

    fn interrupts_paragraph(
        &self,
        view: LineView<'_>,
        line: usize,
        end: usize,
        closes: &mut CloseFenceLimit,
    ) -> bool {
        if view.is_blank(line) || try_open_leaf(view.indented_text(line)).is_some() {
            return true;
        }
        table::rule::can_start(view, line)
            && closes.may_close_at_or_after(view, line, end)
            && table::rule::probe(view, line, end, self.options)
    }
}

/// Last line of a paragraph's range holding a `|#` anywhere in its text,
/// found once on the first `#|` continuation line.
///
/// A table opened below that line can never terminate, so no scan is run
/// for it and a paragraph of unclosed `#|` lines stays linear.
#[derive(Debug, Default)]
struct CloseFenceLimit {
    last: Option<Option<usize>>,
}

impl CloseFenceLimit {
    fn may_close_at_or_after(&mut self, view: LineView<'_>, line: usize, end: usize) -> bool {
        let last = *self.last.get_or_insert_with(|| {
            let bytes = view.bytes();
            (line..end).rev().find(|&l| {
                // one byte past the line end, in case a narrowed line stops mid-fence
                let stop = (view.end(l) + 1).min(bytes.len());
                bytes.get(view.begin(l).min(stop)..stop).is_some_and(|b| {
                    b.windows(ExtendedTable::CLOSE.len())
                        .any(|w| w == ExtendedTable::CLOSE)
                })
            })
        });
        last.is_some_and(|last| last >= line)
    }
}

impl BlockTokenize for BlockTokenizer<'_> {
    fn tokenize(
        &self,
        view: LineView<'_>,
        start_line: usize,
        end_line: usize,
        level: usize,
        out: &mut Emitter,
    ) {
        let end = end_line.min(view.line_limit());
        let mut line = start_line;
        while line < end {
            if view.is_blank(line) {
                line += 1;
                continue;
            }
            line = self.block(view, line, end, level, out);
        }
    }
}
