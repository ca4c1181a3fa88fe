//! The table region scanner.
//!
//! A single forward pass from just after the opening `#|` to the matching
//! top-level `|#`, recording where each row and cell begins and ends. Markers
//! inside fenced code/math, template variables, inline code/math and nested
//! tables are inert.

use crate::parsing::{
    blocks::kinds::ExtendedTable,
    options::TableOptions,
    rope::{LineView, Position, Region, Span},
};

use super::{
    cursor::Cursor,
    detect,
    skip::{skip_inline_code, skip_inline_math},
};

/// Raw content range of one cell, delimiters excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub start: Position,
    pub end: Position,
}

impl CellSpan {
    pub fn region(&self) -> Region {
        Region::new(self.start, self.end)
    }

    pub fn span(&self) -> Span {
        Span::new(self.start.offset, self.end.offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub start_line: usize,
    pub end_line: usize,
    pub cells: Vec<CellSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableScan {
    pub rows: Vec<Row>,
    /// Two lines past the line holding the closing fence; `None` when the
    /// fence is never found.
    pub end_of_table: Option<usize>,
    /// Where the closing `|#` sits.
    pub close: Option<Position>,
    /// Cursor offset when the scan stopped.
    pub final_pos: usize,
}

impl TableScan {
    pub fn is_terminated(&self) -> bool {
        self.end_of_table.is_some()
    }

    /// The widest row's cell count.
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }
}

/// A row between its opening and closing `||`.
#[derive(Debug)]
struct OpenRow {
    start_line: usize,
    cells: Vec<CellSpan>,
    cell_start: Position,
}

impl OpenRow {
    fn new(at: Position) -> Self {
        Self {
            start_line: at.line,
            cells: Vec::new(),
            cell_start: at,
        }
    }

    fn close_cell(&mut self, at: Position) {
        self.cells.push(CellSpan {
            start: self.cell_start,
            end: at,
        });
    }

    fn finish(mut self, at: Position) -> Option<Row> {
        self.close_cell(at);
        (!self.cells.is_empty()).then(|| Row {
            start_line: self.start_line,
            end_line: at.line,
            cells: self.cells,
        })
    }
}

/// Scan state owned by one table match attempt.
#[derive(Debug, Default)]
struct ScanState {
    in_code_fence: bool,
    in_math_fence: bool,
    in_template_var: bool,
    /// Count of inner `#|` fences not yet closed.
    nesting: usize,
    /// The row open at nesting level 0, if any.
    row: Option<OpenRow>,
    rows: Vec<Row>,
}

/// Scans the table whose opening fence is at the indent start of
/// `start_line`, not looking at or beyond `end_line`.
pub fn scan_table(
    view: LineView<'_>,
    start_line: usize,
    end_line: usize,
    options: &TableOptions,
) -> TableScan {
    let start = Position::new(
        start_line,
        view.indent(start_line) + ExtendedTable::OPEN.len(),
    );
    let mut cur = Cursor::new(view, start, end_line);
    let mut st = ScanState::default();

    while !cur.is_exhausted() {
        if cur.at_line_end() {
            cur.advance(1);
            continue;
        }
        let src = cur.line_bytes();
        let pos = cur.pos();

        if options.ignore_splitters_in_block_code
            && !st.in_math_fence
            && detect::code_fence(src, pos)
        {
            st.in_code_fence = !st.in_code_fence;
            cur.advance(3);
            continue;
        }
        if options.ignore_splitters_in_block_math
            && !st.in_code_fence
            && detect::math_fence(src, pos)
        {
            st.in_math_fence = !st.in_math_fence;
            cur.advance(2);
            continue;
        }
        if st.in_code_fence || st.in_math_fence {
            cur.advance(1);
            continue;
        }

        if st.in_template_var {
            if detect::template_close(src, pos) {
                st.in_template_var = false;
                cur.advance(2);
            } else {
                cur.advance(1);
            }
            continue;
        }
        if detect::template_open(src, pos) {
            st.in_template_var = true;
            cur.advance(2);
            continue;
        }

        if options.ignore_splitters_in_inline_code
            && let Some(skip) = skip_inline_code(src, pos, cur.line_end())
        {
            cur.advance(skip.steps);
            continue;
        }
        if options.ignore_splitters_in_inline_math
            && let Some(skip) = skip_inline_math(src, pos, cur.line_end())
        {
            cur.advance(skip.steps);
            continue;
        }

        if detect::table_open(src, pos) {
            st.nesting += 1;
            cur.advance(ExtendedTable::OPEN.len());
            continue;
        }
        if detect::table_close(src, pos) {
            if st.nesting == 0 {
                let close = cur.position();
                if let Some(row) = st.row.take().and_then(|row| row.finish(close)) {
                    st.rows.push(row);
                }
                cur.advance(ExtendedTable::CLOSE.len());
                log::trace!(
                    "table closed at line {} with {} rows",
                    close.line,
                    st.rows.len()
                );
                return TableScan {
                    rows: st.rows,
                    end_of_table: Some(close.line + 2),
                    close: Some(close),
                    final_pos: cur.pos(),
                };
            }
            st.nesting -= 1;
            cur.advance(ExtendedTable::CLOSE.len());
            continue;
        }
        if st.nesting > 0 {
            cur.advance(1);
            continue;
        }

        if detect::row_marker(src, pos) {
            match st.row.take() {
                Some(open) => {
                    if let Some(row) = open.finish(cur.position()) {
                        log::trace!("row {} ends at line {}", st.rows.len(), row.end_line);
                        st.rows.push(row);
                    }
                    cur.advance(ExtendedTable::ROW.len());
                }
                None => {
                    cur.advance(ExtendedTable::ROW.len());
                    st.row = Some(OpenRow::new(cur.position()));
                }
            }
            continue;
        }
        if detect::cell_marker(src, pos) {
            let at = cur.position();
            cur.advance(1);
            if let Some(row) = st.row.as_mut() {
                row.close_cell(at);
                row.cell_start = cur.position();
            }
            continue;
        }

        cur.advance(1);
    }

    log::trace!("table opened at line {start_line} is never closed");
    TableScan {
        rows: st.rows,
        end_of_table: None,
        close: None,
        final_pos: cur.pos(),
    }
}
