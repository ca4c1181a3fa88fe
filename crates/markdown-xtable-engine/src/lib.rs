pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    ParsedDoc,
    diagnostic::{Diagnostic, DiagnosticCode},
    options::TableOptions,
    parse_document, parse_str,
    render::render_html,
    snapshot::dump,
    tokens::{Attributes, Nesting, Token, TokenKind},
};
