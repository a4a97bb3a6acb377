//! Type annotation parsing.

use super::parser::Parser;
use slate_core::{Result, Type};
use slate_lexer::TokenKind;

impl<'a> Parser<'a> {
    /// Parses one of the type keywords `int`, `string`, `bool` or `void`.
    pub(crate) fn parse_type(&mut self) -> Result<Type> {
        let parsed = match self.peek().0.kind {
            TokenKind::IntType => Type::Int,
            TokenKind::StringType => Type::String,
            TokenKind::BoolType => Type::Bool,
            TokenKind::VoidType => Type::Void,
            _ => return Err(self.unexpected("type")),
        };
        self.advance();
        Ok(parsed)
    }
}
