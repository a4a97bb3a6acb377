//! Primary expression parsing (literals, identifiers, calls, grouping).

use super::parser::Parser;
use crate::ast::Expression;
use slate_core::Result;
use slate_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a primary expression.
    pub(crate) fn parse_primary(&mut self) -> Result<Expression> {
        let span = self.current_span();

        match self.peek().0.kind {
            TokenKind::Integer => self.parse_integer_literal(false, span),
            TokenKind::String => {
                let value = self.parse_string_content()?;
                Ok(Expression::String { value, span })
            }
            TokenKind::True | TokenKind::False => {
                let value = self.check(&TokenKind::True);
                self.advance();
                Ok(Expression::Boolean { value, span })
            }
            TokenKind::Identifier => {
                let (name, span) = self.expect_identifier()?;
                if self.check(&TokenKind::LeftParen) {
                    self.parse_call(name, span)
                } else {
                    Ok(Expression::Identifier { name, span })
                }
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(expr)
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses the argument list of a call to `callee`.
    fn parse_call(&mut self, callee: String, start_span: slate_core::Span) -> Result<Expression> {
        self.expect(&TokenKind::LeftParen)?;
        let mut arguments = Vec::new();

        if !self.check(&TokenKind::RightParen) {
            loop {
                arguments.push(self.parse_expression()?);
                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        let end_span = self.expect(&TokenKind::RightParen)?;

        Ok(Expression::Call {
            callee,
            arguments,
            span: start_span.merge(end_span),
        })
    }
}
