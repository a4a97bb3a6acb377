//! Statement parsing.

use super::parser::Parser;
use crate::ast::Statement;
use slate_core::{Error, Result};
use slate_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a statement, propagating syntax errors to the caller.
    pub(crate) fn parse_statement_strict(&mut self) -> Result<Statement> {
        match self.peek().0.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Needs => self.parse_needs_statement(),
            TokenKind::Fn => {
                if self.block_depth > 0 {
                    return Err(Error::Parser(
                        "Function definitions are only allowed at the top level".to_string(),
                        self.current_span(),
                    ));
                }
                Ok(Statement::Function(self.parse_function()?))
            }
            TokenKind::If => Ok(Statement::If(self.parse_if()?)),
            TokenKind::While => Ok(Statement::While(self.parse_while()?)),
            TokenKind::LeftBrace => Ok(Statement::Block(self.parse_block()?)),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Break => {
                let span = self.expect(&TokenKind::Break)?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Statement::Break { span })
            }
            TokenKind::Continue => {
                let span = self.expect(&TokenKind::Continue)?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Statement::Continue { span })
            }
            _ => self.parse_expression_or_assignment(),
        }
    }

    /// Parses the three declaration forms:
    /// `let x: T;`, `let x: T = expr;` and `let x = expr;`.
    fn parse_let_statement(&mut self) -> Result<Statement> {
        self.expect(&TokenKind::Let)?;
        let (name, span) = self.expect_identifier()?;

        let var_type = if self.match_token(&TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        if let Some(var_type) = var_type
            && self.match_token(&TokenKind::Semicolon)
        {
            return Ok(Statement::Declaration {
                name,
                var_type,
                span,
            });
        }

        self.expect(&TokenKind::Equal)?;
        let initializer = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Statement::DeclarationAssign {
            name,
            var_type,
            initializer,
            span,
        })
    }

    /// Parses `needs module;`.
    fn parse_needs_statement(&mut self) -> Result<Statement> {
        let start_span = self.expect(&TokenKind::Needs)?;
        let (module, module_span) = self.expect_identifier()?;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Statement::Needs {
            module,
            span: start_span.merge(module_span),
        })
    }

    /// Parses a return statement.
    fn parse_return_statement(&mut self) -> Result<Statement> {
        let span = self.expect(&TokenKind::Return)?;

        let value = if self.check(&TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        Ok(Statement::Return { value, span })
    }

    /// Parses an expression statement or assignment.
    fn parse_expression_or_assignment(&mut self) -> Result<Statement> {
        if self.check(&TokenKind::Identifier) && self.check_ahead(1, &TokenKind::Equal) {
            let (name, span) = self.expect_identifier()?;
            self.advance(); // consume =

            let value = self.parse_expression()?;
            self.expect(&TokenKind::Semicolon)?;

            return Ok(Statement::Assignment { name, value, span });
        }

        let expression = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon)?;
        let span = expression.span();

        Ok(Statement::Expression { expression, span })
    }
}
