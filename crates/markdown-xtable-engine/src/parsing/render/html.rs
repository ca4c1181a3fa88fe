use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    inline::{InlineNode, parse_inline},
    rope::slice,
    tokens::{Attributes, Nesting, Token, TokenKind},
};

/// Renders an element stream to HTML. Hidden tokens produce no output.
pub fn render_html(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens.iter().filter(|t| !t.hidden) {
        render_token(&mut out, token);
    }
    out
}

fn render_token(out: &mut String, token: &Token) {
    match (token.kind, token.nesting) {
        (TokenKind::Inline, _) => render_inline(out, &token.content),
        (TokenKind::Fence, _) => {
            out.push_str("<pre><code");
            if let Some(lang) = token.info.split_whitespace().next() {
                let _ = write!(out, " class=\"language-{}\"", encode_double_quoted_attribute(lang));
            }
            let _ = writeln!(out, ">{}</code></pre>", encode_text(&token.content));
        }
        (TokenKind::MathBlock, _) => {
            let _ = writeln!(
                out,
                "<div class=\"math\">{}</div>",
                encode_text(token.content.trim_end())
            );
        }
        (TokenKind::Diagnostic, _) => {}
        (kind, Nesting::Open) => {
            let _ = write!(out, "<{}", tag(kind));
            render_attrs(out, &token.attrs);
            out.push('>');
            if kind != TokenKind::Paragraph && kind != TokenKind::Td {
                out.push('\n');
            }
        }
        (kind, Nesting::Close) => {
            let _ = writeln!(out, "</{}>", tag(kind));
        }
        (_, Nesting::SelfClosing) => {}
    }
}

fn tag(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Paragraph => "p",
        other => other.name(),
    }
}

fn render_attrs(out: &mut String, attrs: &Attributes) {
    for (key, values) in attrs.iter() {
        let _ = write!(
            out,
            " {}=\"{}\"",
            key,
            encode_double_quoted_attribute(&values.join(" "))
        );
    }
}

fn render_inline(out: &mut String, text: &str) {
    for node in parse_inline(0, text) {
        match node {
            InlineNode::Text(sp) => {
                out.push_str(&encode_text(&unescape_punctuation(slice(text, sp))));
            }
            InlineNode::CodeSpan { inner, .. } => {
                let _ = write!(out, "<code>{}</code>", encode_text(slice(text, inner)));
            }
            InlineNode::Math { inner, .. } => {
                let _ = write!(
                    out,
                    "<span class=\"math\">{}</span>",
                    encode_text(slice(text, inner))
                );
            }
        }
    }
}

/// Drops the backslash from `\|`, `\\` and other escaped ASCII punctuation.
fn unescape_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && next.is_ascii_punctuation()
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
