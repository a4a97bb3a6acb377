//! Common parsing helper functions.

use super::parser::Parser;
use crate::ast::Expression;
use slate_core::{Error, Result, Span};

impl<'a> Parser<'a> {
    /// Parses the integer literal at the current token into a 32-bit value.
    ///
    /// `start_span` covers a leading minus sign when `negative` is set.
    pub(crate) fn parse_integer_literal(
        &mut self,
        negative: bool,
        start_span: Span,
    ) -> Result<Expression> {
        let (token, literal_span) = self.peek();
        let span = start_span.merge(*literal_span);

        let magnitude: i64 = token
            .text
            .parse()
            .map_err(|_| Error::Parser("Integer literal out of range".to_string(), span))?;
        let value = if negative { -magnitude } else { magnitude };
        let value = i32::try_from(value)
            .map_err(|_| Error::Parser("Integer literal out of range".to_string(), span))?;

        self.advance();
        Ok(Expression::Integer { value, span })
    }

    /// Parses a string literal, removing the quotes and resolving escapes.
    pub(crate) fn parse_string_content(&mut self) -> Result<String> {
        let (token, span) = self.peek();
        let raw = &token.text[1..token.text.len() - 1];

        let mut value = String::with_capacity(raw.len());
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                value.push(c);
                continue;
            }
            match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some('"') => value.push('"'),
                Some('\\') => value.push('\\'),
                Some(other) => {
                    return Err(Error::Parser(
                        format!("Unknown escape sequence '\\{other}'"),
                        *span,
                    ));
                }
                None => {
                    return Err(Error::Parser("Unterminated escape sequence".to_string(), *span));
                }
            }
        }

        self.advance();
        Ok(value)
    }
}
