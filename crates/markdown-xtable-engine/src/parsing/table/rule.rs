use crate::parsing::{
    blocks::{BlockTokenize, Emitter, kinds::ExtendedTable},
    diagnostic::{Diagnostic, DiagnosticCode},
    options::TableOptions,
    rope::LineView,
};

use super::{build::build_table, compact::compact, scan::scan_table, spans::resolve_spans};

/// Fast prefix check: the line starts with `#|` after its indentation.
pub fn can_start(view: LineView<'_>, line: usize) -> bool {
    view.indented_text(line)
        .as_bytes()
        .starts_with(ExtendedTable::OPEN)
}

/// Whether a complete table starts at `line`. Emits nothing.
pub fn probe(view: LineView<'_>, line: usize, end_line: usize, options: &TableOptions) -> bool {
    can_start(view, line) && scan_table(view, line, end_line, options).is_terminated()
}

/// Matches a table at `line` and emits its element tree into `out`.
///
/// Returns the first line after the table, or `None` when the rule does not
/// apply. An unterminated table leaves a diagnostic marker in `out` and no
/// table tokens.
pub fn parse<T: BlockTokenize + ?Sized>(
    host: &T,
    view: LineView<'_>,
    line: usize,
    end_line: usize,
    level: usize,
    options: &TableOptions,
    out: &mut Emitter,
) -> Option<usize> {
    if !can_start(view, line) {
        return None;
    }

    let scan = scan_table(view, line, end_line, options);
    let Some(end_of_table) = scan.end_of_table else {
        out.diagnose(
            Diagnostic::new(DiagnosticCode::UnterminatedTable, line, end_line),
            level,
        );
        return None;
    };

    let mut diagnostics = Vec::new();
    let mut built = build_table(host, view, &scan, line, end_line, level, &mut diagnostics);
    let plan = resolve_spans(&built.content);
    let marked = plan.apply(&built.cells, &mut built.tokens);

    log::debug!(
        "table at line {} spans to line {end_of_table}: {} rows, {} cells removed",
        line + 1,
        scan.rows.len(),
        marked.len()
    );

    out.tokens.extend(compact(built.tokens, &marked));
    out.diagnostics.extend(diagnostics);
    Some(end_of_table.min(end_line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::BlockTokenizer, rope::LineIndex, tokens::TokenKind};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run(src: &str) -> (Option<usize>, Emitter) {
        let options = TableOptions::default();
        let index = LineIndex::from_text(src);
        let mut out = Emitter::new();
        let next = parse(
            &BlockTokenizer::new(&options),
            index.view(src),
            0,
            index.line_count(),
            0,
            &options,
            &mut out,
        );
        (next, out)
    }

    #[rstest]
    #[case("#|", true)]
    #[case("   #| x", true)]
    #[case("#", false)]
    #[case("|#", false)]
    #[case("text #|", false)]
    fn prefix_check(#[case] src: &str, #[case] expected: bool) {
        let index = LineIndex::from_text(src);
        assert_eq!(can_start(index.view(src), 0), expected);
    }

    #[test]
    fn probe_is_silent() {
        let src = "#|\n|| a ||";
        let index = LineIndex::from_text(src);
        let view = index.view(src);
        assert!(!probe(view, 0, index.line_count(), &TableOptions::default()));

        let src = "#|\n|| a ||\n|#";
        let index = LineIndex::from_text(src);
        assert!(probe(index.view(src), 0, index.line_count(), &TableOptions::default()));
    }

    #[test]
    fn unterminated_table_emits_only_a_diagnostic() {
        let (next, out) = run("#|\n|| a | b ||\n");
        assert_eq!(next, None);
        assert_eq!(out.tokens.len(), 1);
        assert!(out.tokens[0].hidden);
        assert_eq!(out.tokens[0].content, "YFM-TABLE-UNTERMINATED");
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].lines, [0, 2]);
    }

    #[test]
    fn colspan_cell_is_merged() {
        let (next, out) = run("#|\n||  a | > ||\n|#");
        assert_eq!(next, Some(3));
        let tds: Vec<_> = out
            .tokens
            .iter()
            .filter(|t| t.is_open(TokenKind::Td))
            .collect();
        assert_eq!(tds.len(), 1);
        assert_eq!(tds[0].attrs.first("colspan"), Some("2"));
    }

    #[test]
    fn next_line_is_clamped_to_range() {
        let (next, _) = run("#|\n|| a ||\n|#\nafter\nmore");
        assert_eq!(next, Some(4));
    }

    #[test]
    fn non_table_line_does_not_apply() {
        let (next, out) = run("plain");
        assert_eq!(next, None);
        assert!(out.tokens.is_empty());
    }
}
