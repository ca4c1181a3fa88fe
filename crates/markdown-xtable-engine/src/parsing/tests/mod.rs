//! Fixture tests for the parsing module.
//!
//! Each fixture (.md) in `fixtures/` is tokenized, checked against the stream
//! invariants, and compared with an inline snapshot of its token dump.


use crate::parsing::{
    diagnostic::DiagnosticCode, options::TableOptions, parse_document, snapshot,
};

fn fixture_dump(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let rope = xi_rope::Rope::from(md.as_str());

    let doc = parse_document(&rope, &TableOptions::default());
    snapshot::invariants(&doc.tokens);
    snapshot::dump(&doc.tokens)
}

#[test]
fn fixture_simple_table() {
    insta::assert_snapshot!(fixture_dump("simple_table"), @r#"
    table_open 0..3
      tbody_open 0..3
        tr_open 1..2
          td_open 1..2
            paragraph_open 1..2
              inline 1..2 "a"
            paragraph_close
          td_close
          td_open 1..2
            paragraph_open 1..2
              inline 1..2 "b"
            paragraph_close
          td_close
        tr_close
      tbody_close
    table_close
    "#);
}

#[test]
fn fixture_span_sentinels() {
    insta::assert_snapshot!(fixture_dump("span_sentinels"), @r#"
    table_open 0..4
      tbody_open 0..4
        tr_open 1..2
          td_open 1..2 colspan="2" rowspan="2"
            paragraph_open 1..2
              inline 1..2 "a"
            paragraph_close
          td_close
        tr_close
        tr_open 2..3
          td_open 2..3
            paragraph_open 2..3
              inline 2..3 "b"
            paragraph_close
          td_close
        tr_close
      tbody_close
    table_close
    "#);
}

#[test]
fn fixture_unterminated() {
    insta::assert_snapshot!(fixture_dump("unterminated"), @r##"
    diagnostic 0..2 hidden "YFM-TABLE-UNTERMINATED"
    paragraph_open 0..2
      inline 0..2 "#|\n|| a | b ||"
    paragraph_close
    "##);
}

#[test]
fn fixture_nested_in_cell() {
    insta::assert_snapshot!(fixture_dump("nested_in_cell"), @r#"
    table_open 0..7
      tbody_open 0..7
        tr_open 1..6
          td_open 1..6
            paragraph_open 1..2
              inline 1..2 "outer"
            paragraph_close
            table_open 2..6
              tbody_open 2..6
                tr_open 3..4
                  td_open 3..4
                    paragraph_open 3..4
                      inline 3..4 "inner"
                    paragraph_close
                  td_close
                  td_open 3..4
                    paragraph_open 3..4
                      inline 3..4 "x"
                    paragraph_close
                  td_close
                tr_close
              tbody_close
            table_close
          td_close
        tr_close
      tbody_close
    table_close
    "#);
}

#[test]
fn fixture_nested_after_row() {
    insta::assert_snapshot!(fixture_dump("nested_after_row"), @r#"
    table_open 0..6
      tbody_open 0..6
        tr_open 1..2
          td_open 1..2
            paragraph_open 1..2
              inline 1..2 "outer"
            paragraph_close
          td_close
        tr_close
      tbody_close
    table_close
    "#);
}

#[test]
fn fixture_raw_zones() {
    insta::assert_snapshot!(fixture_dump("raw_zones"), @r##"
    table_open 0..6
      tbody_open 0..6
        tr_open 1..4
          td_open 1..4
            fence 1..4 "a | b\n"
          td_close
          td_open 3..4
            paragraph_open 3..4
              inline 3..4 "{{ x | y }}"
            paragraph_close
          td_close
        tr_close
        tr_open 4..5
          td_open 4..5
            paragraph_open 4..5
              inline 4..5 "c \\| d"
            paragraph_close
          td_close
          td_open 4..5
            paragraph_open 4..5
              inline 4..5 "e"
            paragraph_close
          td_close
        tr_close
      tbody_close
    table_close
    "##);
}

#[test]
fn fixture_surrounding_text() {
    insta::assert_snapshot!(fixture_dump("surrounding_text"), @r#"
    paragraph_open 0..1
      inline 0..1 "intro"
    paragraph_close
    table_open 2..6
      tbody_open 2..6
        tr_open 3..4
          td_open 3..4
            paragraph_open 3..4
              inline 3..4 "a"
            paragraph_close
          td_close
        tr_close
      tbody_close
    table_close
    paragraph_open 6..7
      inline 6..7 "after"
    paragraph_close
    "#);
}

#[test]
fn later_open_fence_counts_as_nested() {
    // the second `#|` opens a nested table, so the first one never closes
    let rope = xi_rope::Rope::from("#|\n|| a ||\n\n#|\n|| b ||\n|#\n");
    let doc = parse_document(&rope, &TableOptions::default());

    assert_eq!(doc.diagnostics.len(), 1);
    assert_eq!(doc.diagnostics[0].lines, [0, 6]);
    let tables: Vec<_> = doc
        .tokens
        .iter()
        .filter(|t| t.type_name() == "table_open")
        .filter_map(|t| t.map)
        .collect();
    assert_eq!(tables, vec![[3, 6]]);
}

#[test]
fn unterminated_table_after_text() {
    let rope = xi_rope::Rope::from("text\n\n#|\n|| a ||\n");
    let doc = parse_document(&rope, &TableOptions::default());
    assert_eq!(doc.diagnostics.len(), 1);
    assert_eq!(doc.diagnostics[0].code, DiagnosticCode::UnterminatedTable);
    assert_eq!(doc.diagnostics[0].lines, [2, 4]);
}

#[test]
fn rope_and_str_parsing_agree() {
    let md = "# not a heading\n\n#|\n|| a | > ||\n|# {.wide}\n\n> quote\n";
    let rope = xi_rope::Rope::from(md);
    let from_rope = parse_document(&rope, &TableOptions::default());
    let from_str = crate::parsing::parse_str(md, &TableOptions::default());
    assert_eq!(from_rope.tokens, from_str.tokens);
}
