//! Core parser structure and helper methods.

use crate::ast::{Block, Program, Statement};
use slate_core::{Error, Result, Span};
use slate_lexer::{Token, TokenKind};

/// Parser for Slate source code.
pub struct Parser<'a> {
    tokens: &'a [(Token, Span)],
    current: usize,
    /// Number of enclosing blocks at the current position
    pub(crate) block_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, Span)]) -> Self {
        Self {
            tokens,
            current: 0,
            block_depth: 0,
        }
    }

    /// Parses a complete program.
    ///
    /// # Errors
    /// Returns an error if a statement is still incomplete when the input
    /// ends; any other syntax error is recorded as a `Statement::Error`.
    pub fn parse_program(&mut self) -> Result<Program> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(Program { statements })
    }

    /// Parses one statement, turning a syntax error into an error node.
    ///
    /// After an error the parser skips past the next `;`, or up to the
    /// enclosing `}`, and always consumes at least one token.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement> {
        let start = self.current;
        let depth = self.block_depth;

        match self.parse_statement_strict() {
            Ok(statement) => Ok(statement),
            Err(err) if self.is_at_end() => Err(err),
            Err(err) => {
                self.block_depth = depth;
                let (token, _) = self.peek();
                let text = token.text.clone();
                let span = err.span().unwrap_or_else(|| self.current_span());
                let reason = match err {
                    Error::Parser(reason, _) => reason,
                    other => other.to_string(),
                };

                self.synchronize(start);
                Ok(Statement::Error { text, reason, span })
            }
        }
    }

    fn synchronize(&mut self, start: usize) {
        while !self.is_at_end() {
            if self.match_token(&TokenKind::Semicolon) {
                return;
            }
            if self.check(&TokenKind::RightBrace) {
                break;
            }
            self.advance();
        }

        if self.current == start {
            self.advance();
        }
    }

    /// Parses a block of statements.
    pub(crate) fn parse_block(&mut self) -> Result<Block> {
        let start_span = self.expect(&TokenKind::LeftBrace)?;
        let mut statements = Vec::new();

        self.block_depth += 1;
        while !self.check(&TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        self.block_depth -= 1;

        let end_span = self.expect(&TokenKind::RightBrace)?;

        Ok(Block {
            statements,
            span: start_span.merge(end_span),
        })
    }

    // ==================== Helper Methods ====================

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Returns the current token, or the last one once the input is exhausted.
    ///
    /// Only called on non-empty token streams: `parse_program` never enters
    /// its loop for an empty one.
    pub(crate) fn peek(&self) -> &(Token, Span) {
        if self.is_at_end() {
            &self.tokens[self.tokens.len() - 1]
        } else {
            &self.tokens[self.current]
        }
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        !self.is_at_end() && &self.peek().0.kind == kind
    }

    pub(crate) fn check_ahead(&self, offset: usize, kind: &TokenKind) -> bool {
        self.tokens
            .get(self.current + offset)
            .is_some_and(|t| &t.0.kind == kind)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_tokens(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        for kind in kinds {
            if self.check(kind) {
                let matched = kind.clone();
                self.advance();
                return Some(matched);
            }
        }
        None
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Span> {
        if self.check(kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(&format!("'{kind}'")))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<(String, Span)> {
        if self.check(&TokenKind::Identifier) {
            let (token, span) = self.peek();
            let identifier = (token.text.clone(), *span);
            self.advance();
            Ok(identifier)
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Builds an "expected X, found Y" error at the current token.
    pub(crate) fn unexpected(&self, expected: &str) -> Error {
        let found = if self.is_at_end() {
            "end of input".to_string()
        } else {
            format!("'{}'", self.peek().0.text)
        };
        Error::Parser(format!("Expected {expected}, found {found}"), self.current_span())
    }

    pub(crate) fn current_span(&self) -> Span {
        self.peek().1
    }

    pub(crate) fn previous_span(&self) -> Span {
        if self.current > 0 {
            self.tokens[self.current - 1].1
        } else {
            self.current_span()
        }
    }
}
