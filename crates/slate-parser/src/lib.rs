//! Parser for the Slate language.
//!
//! This crate turns a token stream into an Abstract Syntax Tree. Statements
//! that cannot be parsed do not abort parsing: they are recorded as
//! [`Statement::Error`] nodes at the offending token and reported later by the
//! semantic checker.

pub mod ast;
pub mod control_flow;
mod parsing;

pub use ast::{
    BinaryOperator, Block, Expression, Function, Parameter, Program, Statement, UnaryOperator,
};
pub use control_flow::{ConditionalBranch, If, While};
pub use parsing::Parser;

use slate_core::{Result, Span};
use slate_lexer::Token;

/// Parses a slice of tokens into a Slate program AST.
///
/// # Errors
/// Returns an error only when the token stream cannot be turned into a
/// program at all; ordinary syntax errors become `Statement::Error` nodes.
///
/// # Examples
/// ```
/// use slate_lexer::tokenize;
/// use slate_parser::parse;
///
/// let source = "let x: int = 1 + 2;";
/// let tokens = tokenize(source).unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 1);
/// ```
pub fn parse(tokens: &[(Token, Span)]) -> Result<Program> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}
