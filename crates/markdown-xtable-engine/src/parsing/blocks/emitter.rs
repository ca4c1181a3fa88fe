use crate::parsing::{diagnostic::Diagnostic, tokens::Token};

/// Output of a tokenizer run: the token stream and the diagnostics raised
/// while producing it.
#[derive(Debug, Default)]
pub struct Emitter {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Records `diag` and leaves its hidden marker in the stream at `level`.
    pub fn diagnose(&mut self, diag: Diagnostic, level: usize) {
        log::warn!("{diag}");
        self.tokens.push(diag.marker(level));
        self.diagnostics.push(diag);
    }
}
