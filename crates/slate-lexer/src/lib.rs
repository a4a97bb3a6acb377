//! Lexical analysis for the Slate language.
//!
//! This crate provides tokenization of Slate source code into a stream of
//! tokens, each paired with the line/column span it was read from.

mod token;

pub use token::{Token, TokenKind};

use logos::Logos;
use slate_core::{Error, Location, Result, Span};

/// Tokenizes Slate source code into a vector of tokens.
///
/// # Errors
/// Returns an error if the source contains invalid tokens
///
/// # Examples
/// ```
/// use slate_lexer::tokenize;
///
/// let source = "let x: int = 42;";
/// let tokens = tokenize(source).unwrap();
/// assert_eq!(tokens.len(), 7);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>> {
    let lines = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let span = Span::new(lines.location(range.start), lines.location(range.end));

        let kind = result.map_err(|()| {
            Error::Lexer(format!("Invalid token '{}'", lexer.slice()), span)
        })?;

        tokens.push((
            Token {
                kind,
                text: lexer.slice().to_string(),
            },
            span,
        ));
    }

    Ok(tokens)
}

/// Byte offsets at which each line of the source starts.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(index, _)| index + 1))
            .collect();
        Self { starts }
    }

    fn location(&self, offset: usize) -> Location {
        let line = match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Location::with_offset(line + 1, offset - self.starts[line] + 1, offset)
    }
}
