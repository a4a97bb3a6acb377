//! Helpers shared by unit tests.

use crate::symbol::{Symbol, VariableSymbol};
use crate::evaluator::Evaluation;
use slate_core::{Location, Span};
use slate_parser::{Expression, Statement};

/// Parses a single expression.
pub(crate) fn expr(source: &str) -> Expression {
    let tokens = slate_lexer::tokenize(&format!("{source};")).unwrap();
    let program = slate_parser::parse(&tokens).unwrap();
    match program.statements.into_iter().next() {
        Some(Statement::Expression { expression, .. }) => expression,
        other => panic!("Expected expression statement, got {other:?}"),
    }
}

pub(crate) fn span() -> Span {
    Span::new(Location::new(1, 1), Location::new(1, 2))
}

pub(crate) fn static_int(name: &str, value: i32) -> Symbol {
    Symbol::Int(VariableSymbol::initialized(
        name,
        span(),
        Evaluation::fixed(value),
    ))
}

pub(crate) fn dynamic_int(name: &str) -> Symbol {
    Symbol::Int(VariableSymbol::parameter(name, span()))
}

pub(crate) fn static_string(name: &str, value: &str) -> Symbol {
    Symbol::String(VariableSymbol::initialized(
        name,
        span(),
        Evaluation::fixed(value.to_string()),
    ))
}

pub(crate) fn static_bool(name: &str, value: bool) -> Symbol {
    Symbol::Bool(VariableSymbol::initialized(
        name,
        span(),
        Evaluation::fixed(value),
    ))
}
