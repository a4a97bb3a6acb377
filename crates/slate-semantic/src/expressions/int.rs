use super::{ExpressionChecker, call_return_type};
use crate::symbol::Symbol;
use crate::symbol_table::SymbolTable;
use slate_core::Type;
use slate_parser::{Expression, UnaryOperator};

/// Accepts integer arithmetic over int literals, variables and calls.
pub struct IntExpressionChecker<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> IntExpressionChecker<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }
}

impl ExpressionChecker for IntExpressionChecker<'_> {
    fn target(&self) -> Type {
        Type::Int
    }

    fn check_expr(&self, expr: &Expression) -> bool {
        match expr {
            Expression::Integer { .. } => true,
            Expression::String { .. } | Expression::Boolean { .. } => false,
            Expression::Identifier { name, .. } => {
                matches!(self.symbols.lookup(name), Some(Symbol::Int(_)))
            }
            Expression::Binary {
                left,
                operator,
                right,
                ..
            } => operator.is_arithmetic() && self.check_expr(left) && self.check_expr(right),
            Expression::Unary {
                operator, operand, ..
            } => *operator == UnaryOperator::Negate && self.check_expr(operand),
            Expression::Call {
                callee, arguments, ..
            } => call_return_type(self.symbols, callee, arguments) == Some(Type::Int),
        }
    }
}
