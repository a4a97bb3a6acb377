//! Error types and result aliases for the Slate compiler.

use crate::Span;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Main error type for the Slate compiler.
///
/// Every semantic variant is fatal for the current compilation run: the first
/// one produced stops the analysis pass.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lexer error: {0}")]
    #[diagnostic(code(slate::lexer))]
    Lexer(String, #[label("here")] Span),

    #[error("Parser error: {0}")]
    #[diagnostic(code(slate::parser))]
    Parser(String, #[label("here")] Span),

    /// A statement the parser could not make sense of, reached by the checker.
    #[error("Syntax error at '{text}': {reason}")]
    #[diagnostic(code(slate::syntax))]
    Syntax {
        text: String,
        reason: String,
        #[label("unexpected token")]
        span: Span,
    },

    #[error("{0}")]
    #[diagnostic(code(slate::redeclaration))]
    Redeclaration(String, #[label("declared again here")] Span),

    #[error("{0}")]
    #[diagnostic(code(slate::unresolved))]
    UnresolvedIdentifier(String, #[label("not found in this scope")] Span),

    #[error("{0}")]
    #[diagnostic(code(slate::type_mismatch))]
    TypeMismatch(String, #[label("here")] Span),

    #[error("{0}")]
    #[diagnostic(code(slate::illegal))]
    IllegalConstruct(String, #[label("here")] Span),

    #[error("{0}")]
    #[diagnostic(code(slate::missing_return))]
    IncompleteReturn(String, #[label("in this function")] Span),

    #[error("{0}")]
    #[diagnostic(code(slate::return_type))]
    ReturnTypeMismatch(String, #[label("here")] Span),

    #[error("Internal compiler error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns the source span the error points at, if it has one.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Lexer(_, span)
            | Self::Parser(_, span)
            | Self::Syntax { span, .. }
            | Self::Redeclaration(_, span)
            | Self::UnresolvedIdentifier(_, span)
            | Self::TypeMismatch(_, span)
            | Self::IllegalConstruct(_, span)
            | Self::IncompleteReturn(_, span)
            | Self::ReturnTypeMismatch(_, span) => Some(*span),
            Self::Io(_) | Self::Config(_) | Self::Internal(_) => None,
        }
    }

    /// Returns the 1-based source line of the error, if it has one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        self.span().map(|span| span.start.line)
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from(span.start.offset..span.end.offset)
    }
}

/// Result type alias using the Slate Error type.
pub type Result<T> = std::result::Result<T, Error>;
