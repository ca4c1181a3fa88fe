use std::collections::BTreeSet;

use crate::parsing::tokens::{Nesting, Token, TokenKind};

/// Removes each marked `td_open` together with everything up to its
/// matching `td_close`.
///
/// The match is the nearest `Close` after the open at the same level. When
/// none is found, or it is not a cell close, that deletion is skipped so the
/// stream stays balanced. All removals are collected first and applied in a
/// single filtering pass.
pub fn compact(tokens: Vec<Token>, marked: &BTreeSet<usize>) -> Vec<Token> {
    if marked.is_empty() {
        return tokens;
    }

    let mut keep = vec![true; tokens.len()];
    for &open in marked {
        let Some(td) = tokens.get(open).filter(|t| t.is_open(TokenKind::Td)) else {
            log::debug!("token {open} is not a cell open; not removing it");
            continue;
        };
        let close = tokens[open + 1..]
            .iter()
            .position(|t| t.nesting == Nesting::Close && t.level == td.level)
            .map(|offset| open + 1 + offset)
            .filter(|&i| tokens[i].kind == TokenKind::Td);

        match close {
            Some(close) => keep[open..=close].fill(false),
            None => log::debug!("cell at token {open} has no matching close; keeping it"),
        }
    }

    tokens
        .into_iter()
        .zip(keep)
        .filter_map(|(token, keep)| keep.then_some(token))
        .collect()
}
