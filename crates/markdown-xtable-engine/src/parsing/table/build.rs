//! Turns scanned row/cell boundaries into the `table` element tree.

use crate::parsing::{
    attrs::{parse_attrs, split_trailing_attrs},
    blocks::{BlockTokenize, Emitter},
    diagnostic::Diagnostic,
    rope::{LineView, Span, preview, slice},
    tokens::{Attributes, Nesting, Token, TokenKind},
};

use super::scan::TableScan;

/// Trimmed text of every cell, row-major, padded to the widest row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentMap {
    rows: Vec<Vec<String>>,
}

impl ContentMap {
    /// Pads ragged rows with empty cells.
    pub fn new(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// A built table before span resolution.
#[derive(Debug, Clone)]
pub struct BuiltTable {
    /// `table_open` through `table_close`.
    pub tokens: Vec<Token>,
    pub content: ContentMap,
    /// Index into `tokens` of each cell's `td_open`, same shape as `content`.
    pub cells: Vec<Vec<usize>>,
}

/// Emits the element tree for a terminated scan.
///
/// The table's line map stops at `range_end`, the end of the range the table
/// was matched in, so it never reaches past its parent. Each cell's raw range is handed to `host` for block tokenization with a
/// view narrowed to the cell, so the surrounding line bounds are never
/// modified. Diagnostics raised inside cells are appended to `diagnostics`.
pub fn build_table<T: BlockTokenize + ?Sized>(
    host: &T,
    view: LineView<'_>,
    scan: &TableScan,
    start_line: usize,
    range_end: usize,
    level: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> BuiltTable {
    let max_row_len = scan.max_row_len();
    let end_line = scan
        .end_of_table
        .unwrap_or(start_line + 1)
        .min(range_end)
        .max(start_line + 1);
    let mut tokens = Vec::new();
    let mut content = Vec::with_capacity(scan.rows.len());
    let mut cells = Vec::with_capacity(scan.rows.len());

    let mut table_open = Token::open(TokenKind::Table, level).with_map(start_line, end_line);
    table_open.attrs = table_attrs(view, scan);
    tokens.push(table_open);
    tokens.push(Token::open(TokenKind::Tbody, level + 1).with_map(start_line, end_line));

    for row in &scan.rows {
        let mut row_content = Vec::with_capacity(max_row_len);
        let mut row_cells = Vec::with_capacity(max_row_len);
        tokens.push(Token::open(TokenKind::Tr, level + 2).with_map(row.start_line, row.end_line + 1));

        for cell in &row.cells {
            let region = cell.region();
            let mut sub = Emitter::new();
            host.tokenize(
                view.with_region(region),
                region.start.line,
                region.line_limit(),
                level + 4,
                &mut sub,
            );

            let inline = content_inline(&sub.tokens);
            row_content.push(capture_content(&sub.tokens, inline));

            let mut td_open = Token::open(TokenKind::Td, level + 3)
                .with_map(region.start.line, region.line_limit());
            if let Some(idx) = inline {
                for class in take_trailing_classes(&mut sub.tokens[idx]) {
                    td_open.attrs.append("class", class);
                }
            }

            row_cells.push(tokens.len());
            tokens.push(td_open);
            tokens.extend(sub.tokens);
            tokens.push(Token::close(TokenKind::Td, level + 3));
            diagnostics.extend(sub.diagnostics);
        }

        for _ in row.cells.len()..max_row_len {
            row_content.push(String::new());
            row_cells.push(tokens.len());
            tokens.push(Token::open(TokenKind::Td, level + 3));
            tokens.push(Token::close(TokenKind::Td, level + 3));
        }

        tokens.push(Token::close(TokenKind::Tr, level + 2));
        content.push(row_content);
        cells.push(row_cells);
    }

    tokens.push(Token::close(TokenKind::Tbody, level + 1));
    tokens.push(Token::close(TokenKind::Table, level));

    BuiltTable {
        tokens,
        content: ContentMap::new(content),
        cells,
    }
}

/// Attributes written after the closing fence on the same line.
///
/// Malformed text yields an empty mapping; the table is built regardless.
fn table_attrs(view: LineView<'_>, scan: &TableScan) -> Attributes {
    let Some(close) = scan.close else {
        return Attributes::new();
    };
    let text = slice(
        view.src(),
        Span::new(close.offset + 2, view.end(close.line)),
    );
    match parse_attrs(text) {
        Ok(attrs) => attrs.materialize(),
        Err(err) => {
            log::debug!(
                "ignoring table attributes {:?} on line {}: {err}",
                preview(text, 40),
                close.line + 1
            );
            Attributes::new()
        }
    }
}

/// Index of the inline token carrying a paragraph cell's text, when the
/// cell's first visible block is a paragraph.
fn content_inline(tokens: &[Token]) -> Option<usize> {
    let mut visible = tokens.iter().enumerate().filter(|(_, t)| !t.hidden);
    let (_, first) = visible.next()?;
    if !first.is_open(TokenKind::Paragraph) {
        return None;
    }
    visible
        .next()
        .filter(|(_, t)| t.kind == TokenKind::Inline)
        .map(|(i, _)| i)
}

/// Text of the cell's first content node.
///
/// Falls back to the node's markup when it has no text, so a cell holding
/// a bare `>` (consumed as an empty blockquote) still reads as `>`.
fn capture_content(tokens: &[Token], inline: Option<usize>) -> String {
    if let Some(idx) = inline {
        return tokens[idx].content.trim().to_string();
    }
    let mut visible = tokens.iter().filter(|t| !t.hidden);
    let Some(first) = visible.next() else {
        return String::new();
    };
    match first.nesting {
        Nesting::Open => match visible.next() {
            Some(next) if next.is_close(first.kind) => first.markup.clone(),
            _ => String::new(),
        },
        Nesting::SelfClosing => {
            let text = first.content.trim();
            if text.is_empty() {
                first.markup.clone()
            } else {
                text.to_string()
            }
        }
        Nesting::Close => String::new(),
    }
}

/// Strips a trailing `{.class}` fragment from `inline` and returns its
/// classes.
///
/// Only fragments made of classes alone are taken. Anything else (no class,
/// an `#id`, a `key=value`, a flag) stays in the text untouched.
fn take_trailing_classes(inline: &mut Token) -> Vec<String> {
    let Some((text, fragment)) = split_trailing_attrs(&inline.content) else {
        return Vec::new();
    };
    let attrs = match parse_attrs(fragment) {
        Ok(attrs) => attrs,
        Err(err) => {
            log::debug!("ignoring cell attributes {fragment:?}: {err}");
            return Vec::new();
        }
    };
    if attrs.iter().any(|(key, _)| key != "class") {
        log::debug!("keeping cell attributes {fragment:?} in text: only classes move to the cell");
        return Vec::new();
    }
    let classes = attrs.get("class").map(<[String]>::to_vec).unwrap_or_default();
    if !classes.is_empty() {
        inline.content = text.to_string();
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::BlockTokenizer, options::TableOptions, rope::LineIndex, table::scan::scan_table,
    };
    use pretty_assertions::assert_eq;

    fn build(src: &str) -> BuiltTable {
        let options = TableOptions::default();
        let index = LineIndex::from_text(src);
        let view = index.view(src);
        let scan = scan_table(view, 0, index.line_count(), &options);
        let mut diagnostics = Vec::new();
        build_table(
            &BlockTokenizer::new(&options),
            view,
            &scan,
            0,
            index.line_count(),
            0,
            &mut diagnostics,
        )
    }

    fn td_count_per_row(tokens: &[Token]) -> Vec<usize> {
        let mut counts = Vec::new();
        for t in tokens {
            if t.is_open(TokenKind::Tr) {
                counts.push(0);
            }
            if t.is_open(TokenKind::Td)
                && let Some(last) = counts.last_mut()
            {
                *last += 1;
            }
        }
        counts
    }

    #[test]
    fn content_map_holds_trimmed_text() {
        let built = build("#|\n||  a | b ||\n|#");
        assert_eq!(built.content.rows(), &[vec!["a".to_string(), "b".to_string()]]);
        assert_eq!(built.tokens[0].map, Some([0, 3]));
        assert_eq!(built.tokens.last().map(Token::type_name).as_deref(), Some("table_close"));
    }

    #[test]
    fn short_rows_are_padded_with_empty_cells() {
        let built = build("#|\n|| a | b | c ||\n|| d ||\n|#");
        assert_eq!(td_count_per_row(&built.tokens), vec![3, 3]);
        assert_eq!(built.content.get(1, 2), "");

        let pad = &built.tokens[built.cells[1][2]];
        assert!(pad.attrs.is_empty());
        assert_eq!(pad.map, None);
        assert!(built.tokens[built.cells[1][2] + 1].is_close(TokenKind::Td));
    }

    #[test]
    fn cell_indices_point_at_td_open() {
        let built = build("#|\n|| a | b ||\n|| c ||\n|#");
        for row in &built.cells {
            for &idx in row {
                assert!(built.tokens[idx].is_open(TokenKind::Td));
                assert_eq!(built.tokens[idx].level, 3);
            }
        }
    }

    #[test]
    fn bare_gt_reads_as_colspan_sentinel() {
        let built = build("#|\n|| a | > ||\n|#");
        assert_eq!(built.content.get(0, 1), ">");
    }

    #[test]
    fn trailing_class_moves_to_td() {
        let built = build("#|\n|| red text {.warn .big} | b ||\n|#");
        let td = &built.tokens[built.cells[0][0]];
        assert_eq!(
            td.attrs.get("class"),
            Some(&["warn".to_string(), "big".to_string()][..])
        );
        let inline = &built.tokens[built.cells[0][0] + 2];
        assert_eq!(inline.content, "red text");
        // the content map keeps the captured text
        assert_eq!(built.content.get(0, 0), "red text {.warn .big}");
    }

    #[test]
    fn fragment_without_class_is_left_alone() {
        let built = build("#|\n|| text {#id} ||\n|#");
        assert!(built.tokens[built.cells[0][0]].attrs.is_empty());
        assert_eq!(built.tokens[built.cells[0][0] + 2].content, "text {#id}");
    }

    #[test]
    fn mixed_fragment_stays_in_text() {
        let built = build("#|\n|| a {.x #y} | b {.z data=1} ||\n|#");
        for col in 0..2 {
            assert!(built.tokens[built.cells[0][col]].attrs.is_empty());
        }
        assert_eq!(built.tokens[built.cells[0][0] + 2].content, "a {.x #y}");
        assert_eq!(built.tokens[built.cells[0][1] + 2].content, "b {.z data=1}");
    }

    #[test]
    fn table_map_stops_at_range_end() {
        let built = build("#|\n|| a ||\n|#\nafter");
        assert_eq!(built.tokens[0].map, Some([0, 4]));
        assert_eq!(built.tokens[1].map, Some([0, 4]));

        let built = build("#|\n|| a ||\n|#\n");
        assert_eq!(built.tokens[0].map, Some([0, 3]));
    }

    #[test]
    fn table_attributes_follow_close_fence() {
        let built = build("#|\n|| a ||\n|# {.wide .dense border=1 sortable}");
        let attrs: Vec<_> = built.tokens[0]
            .attrs
            .iter()
            .map(|(k, v)| format!("{k}={}", v.join(",")))
            .collect();
        assert_eq!(attrs, vec!["class=wide dense", "border=1", "sortable=true"]);
    }

    #[test]
    fn malformed_table_attributes_are_ignored() {
        let built = build("#|\n|| a ||\n|# {.wide");
        assert!(built.tokens[0].attrs.is_empty());
        assert_eq!(built.content.get(0, 0), "a");
    }

    #[test]
    fn cell_content_levels_sit_below_td() {
        let built = build("#|\n|| a ||\n|#");
        let names: Vec<_> = built
            .tokens
            .iter()
            .map(|t| format!("{}@{}", t.type_name(), t.level))
            .collect();
        assert_eq!(
            names,
            vec![
                "table_open@0",
                "tbody_open@1",
                "tr_open@2",
                "td_open@3",
                "paragraph_open@4",
                "inline@5",
                "paragraph_close@4",
                "td_close@3",
                "tr_close@2",
                "tbody_close@1",
                "table_close@0",
            ]
        );
    }

    #[test]
    fn code_fence_cell_captures_code() {
        let built = build("#|\n||\n```\nx | y\n```\n||\n|#");
        assert_eq!(built.content.get(0, 0), "x | y");
    }
}
