//! Control flow AST nodes for Slate.

use slate_core::Span;

use crate::ast::{Block, Expression};

/// If statement with optional else-if chain and else block.
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    /// The `if` branch followed by every `else if` branch, in source order
    pub branches: Vec<ConditionalBranch>,
    /// Optional final unconditional else block
    pub else_block: Option<Block>,
    /// Span of the leading `if` keyword
    pub span: Span,
}

impl If {
    #[must_use]
    pub fn has_else(&self) -> bool {
        self.else_block.is_some()
    }
}

/// A guarded branch of an if statement (`if` or `else if`).
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalBranch {
    pub condition: Expression,
    pub block: Block,
    /// Span of the branch keyword(s)
    pub span: Span,
}

/// While loop: test before each iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub condition: Expression,
    pub body: Block,
    /// Span of the `while` keyword
    pub span: Span,
}
