use super::{ExpressionChecker, call_return_type};
use crate::symbol::Symbol;
use crate::symbol_table::SymbolTable;
use slate_core::Type;
use slate_parser::{BinaryOperator, Expression};

/// Accepts string literals, variables, calls and their concatenation.
pub struct StringExpressionChecker<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> StringExpressionChecker<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }
}

impl ExpressionChecker for StringExpressionChecker<'_> {
    fn target(&self) -> Type {
        Type::String
    }

    fn check_expr(&self, expr: &Expression) -> bool {
        match expr {
            Expression::String { .. } => true,
            Expression::Integer { .. } | Expression::Boolean { .. } => false,
            Expression::Identifier { name, .. } => {
                matches!(self.symbols.lookup(name), Some(Symbol::String(_)))
            }
            Expression::Binary {
                left,
                operator: BinaryOperator::Add,
                right,
                ..
            } => self.check_expr(left) && self.check_expr(right),
            Expression::Binary { .. } | Expression::Unary { .. } => false,
            Expression::Call {
                callee, arguments, ..
            } => call_return_type(self.symbols, callee, arguments) == Some(Type::String),
        }
    }
}
