//! Loop context management for type checking.

use slate_core::Span;

/// Context for one enclosing `while` loop.
#[derive(Debug, Clone)]
pub struct LoopContext {
    /// Span of the `while` keyword
    pub span: Span,
    /// Whether a break statement was seen
    pub has_break: bool,
}

impl LoopContext {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            has_break: false,
        }
    }
}
