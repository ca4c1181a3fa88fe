use crate::parsing::rope::Span;

/// A parsed inline node with byte spans into the parsed text.
///
/// All variants store spans rather than text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a raw zone: no parsing inside.
    CodeSpan {
        /// Full span including the backtick runs.
        full: Span,
        /// Content between the backtick runs.
        inner: Span,
    },
    /// `$...$` inline math.
    Math { full: Span, inner: Span },
}

impl InlineNode {
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } | InlineNode::Math { full, .. } => *full,
        }
    }
}
