//! Function definition parsing.

use super::parser::Parser;
use crate::ast::{Function, Parameter};
use slate_core::Result;
use slate_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses `fn name(params) [-> type] { ... }`.
    pub(crate) fn parse_function(&mut self) -> Result<Function> {
        self.expect(&TokenKind::Fn)?;
        let (name, span) = self.expect_identifier()?;

        self.expect(&TokenKind::LeftParen)?;
        let params = self.parse_parameters()?;
        self.expect(&TokenKind::RightParen)?;

        let return_type = if self.match_token(&TokenKind::Arrow) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let body = self.parse_block()?;

        Ok(Function {
            name,
            params,
            return_type,
            body,
            span,
        })
    }

    /// Parses a comma-separated parameter list (possibly empty).
    fn parse_parameters(&mut self) -> Result<Vec<Parameter>> {
        let mut params = Vec::new();

        if self.check(&TokenKind::RightParen) {
            return Ok(params);
        }

        loop {
            let (name, span) = self.expect_identifier()?;
            self.expect(&TokenKind::Colon)?;
            let param_type = self.parse_type()?;

            params.push(Parameter {
                name,
                param_type,
                span,
            });

            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }
}
