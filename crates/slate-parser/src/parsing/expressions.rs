//! Expression parsing with operator precedence.

use super::parser::Parser;
use crate::ast::{BinaryOperator, Expression, UnaryOperator};
use slate_core::Result;
use slate_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_or()
    }

    /// Parses logical OR expression.
    fn parse_or(&mut self) -> Result<Expression> {
        let mut expr = self.parse_and()?;

        while self.match_token(&TokenKind::PipePipe) {
            let right = self.parse_and()?;
            expr = binary(expr, BinaryOperator::Or, right);
        }

        Ok(expr)
    }

    /// Parses logical AND expression.
    fn parse_and(&mut self) -> Result<Expression> {
        let mut expr = self.parse_equality()?;

        while self.match_token(&TokenKind::AmpersandAmpersand) {
            let right = self.parse_equality()?;
            expr = binary(expr, BinaryOperator::And, right);
        }

        Ok(expr)
    }

    /// Parses equality expression (==, !=).
    fn parse_equality(&mut self) -> Result<Expression> {
        let mut expr = self.parse_comparison()?;

        while let Some(op_kind) = self.match_tokens(&[TokenKind::EqualEqual, TokenKind::BangEqual])
        {
            let operator = match op_kind {
                TokenKind::EqualEqual => BinaryOperator::Equal,
                _ => BinaryOperator::NotEqual,
            };
            let right = self.parse_comparison()?;
            expr = binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// Parses comparison expression (<, <=, >, >=).
    fn parse_comparison(&mut self) -> Result<Expression> {
        let mut expr = self.parse_term()?;

        while let Some(op_kind) = self.match_tokens(&[
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
        ]) {
            let operator = match op_kind {
                TokenKind::Less => BinaryOperator::Less,
                TokenKind::LessEqual => BinaryOperator::LessEqual,
                TokenKind::Greater => BinaryOperator::Greater,
                _ => BinaryOperator::GreaterEqual,
            };
            let right = self.parse_term()?;
            expr = binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// Parses addition/subtraction expression.
    fn parse_term(&mut self) -> Result<Expression> {
        let mut expr = self.parse_factor()?;

        while let Some(op_kind) = self.match_tokens(&[TokenKind::Plus, TokenKind::Minus]) {
            let operator = match op_kind {
                TokenKind::Plus => BinaryOperator::Add,
                _ => BinaryOperator::Subtract,
            };
            let right = self.parse_factor()?;
            expr = binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// Parses multiplication/division/modulo expression.
    fn parse_factor(&mut self) -> Result<Expression> {
        let mut expr = self.parse_unary()?;

        while let Some(op_kind) =
            self.match_tokens(&[TokenKind::Star, TokenKind::Slash, TokenKind::Percent])
        {
            let operator = match op_kind {
                TokenKind::Star => BinaryOperator::Multiply,
                TokenKind::Slash => BinaryOperator::Divide,
                _ => BinaryOperator::Modulo,
            };
            let right = self.parse_unary()?;
            expr = binary(expr, operator, right);
        }

        Ok(expr)
    }

    /// Parses unary expression (-, !).
    ///
    /// A minus directly followed by an integer literal is read as a negative
    /// literal so that `-2147483648` is representable.
    fn parse_unary(&mut self) -> Result<Expression> {
        if self.check(&TokenKind::Minus) && self.check_ahead(1, &TokenKind::Integer) {
            let start_span = self.current_span();
            self.advance();
            return self.parse_integer_literal(true, start_span);
        }

        if let Some(op_kind) = self.match_tokens(&[TokenKind::Minus, TokenKind::Bang]) {
            let start_span = self.previous_span();
            let operator = match op_kind {
                TokenKind::Minus => UnaryOperator::Negate,
                _ => UnaryOperator::Not,
            };
            let operand = self.parse_unary()?;
            let span = start_span.merge(operand.span());

            return Ok(Expression::Unary {
                operator,
                operand: Box::new(operand),
                span,
            });
        }

        self.parse_primary()
    }
}

fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Expression {
    let span = left.span().merge(right.span());
    Expression::Binary {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span,
    }
}
