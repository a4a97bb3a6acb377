//! Control flow parsing (if, while).

use super::parser::Parser;
use crate::control_flow::{ConditionalBranch, If, While};
use slate_core::{Result, Span};
use slate_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses an if statement with its `else if` chain and optional `else`.
    pub(crate) fn parse_if(&mut self) -> Result<If> {
        let span = self.expect(&TokenKind::If)?;
        let mut branches = vec![self.parse_conditional_branch(span)?];
        let mut else_block = None;

        while self.match_token(&TokenKind::Else) {
            if self.check(&TokenKind::If) {
                let else_span = self.previous_span();
                let if_span = self.expect(&TokenKind::If)?;
                branches.push(self.parse_conditional_branch(else_span.merge(if_span))?);
            } else {
                else_block = Some(self.parse_block()?);
                break;
            }
        }

        Ok(If {
            branches,
            else_block,
            span,
        })
    }

    /// Parses `(condition) { ... }` after an `if` keyword.
    fn parse_conditional_branch(&mut self, span: Span) -> Result<ConditionalBranch> {
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        let block = self.parse_block()?;

        Ok(ConditionalBranch {
            condition,
            block,
            span,
        })
    }

    /// Parses `while (condition) { ... }`.
    pub(crate) fn parse_while(&mut self) -> Result<While> {
        let span = self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LeftParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen)?;
        let body = self.parse_block()?;

        Ok(While {
            condition,
            body,
            span,
        })
    }
}
