use crate::parsing::tokens::{Nesting, Token, TokenKind};

/// Panics unless every open token has exactly one close of the same kind at
/// the same level, properly nested, and children sit one level deeper than
/// their parent.
pub fn check(tokens: &[Token]) {
    let mut stack: Vec<(TokenKind, usize)> = Vec::new();
    for (i, t) in tokens.iter().enumerate() {
        let expected = stack.last().map_or(t.level, |&(_, level)| level + 1);
        match t.nesting {
            Nesting::Open => {
                assert_eq!(
                    t.level, expected,
                    "token {i} ({}) opens at level {} under a parent at {:?}",
                    t.type_name(),
                    t.level,
                    stack.last()
                );
                stack.push((t.kind, t.level));
            }
            Nesting::Close => {
                let open = stack.pop();
                assert_eq!(
                    open,
                    Some((t.kind, t.level)),
                    "token {i} ({}) closes {:?}",
                    t.type_name(),
                    open
                );
            }
            Nesting::SelfClosing => {
                assert_eq!(
                    t.level, expected,
                    "token {i} ({}) at level {} under a parent at {:?}",
                    t.type_name(),
                    t.level,
                    stack.last()
                );
            }
        }
    }
    assert!(stack.is_empty(), "unclosed tokens: {stack:?}");

    for (i, t) in tokens.iter().enumerate() {
        if t.is_open(TokenKind::Td) {
            assert!(
                tokens[i + 1..]
                    .iter()
                    .find(|c| c.nesting == Nesting::Close && c.level == t.level)
                    .is_some_and(|c| c.kind == TokenKind::Td),
                "td_open at token {i} has no matching td_close"
            );
        }
    }
}
