use super::{
    ExpressionChecker, IntExpressionChecker, StringExpressionChecker, call_return_type,
};
use crate::symbol::Symbol;
use crate::symbol_table::SymbolTable;
use slate_core::Type;
use slate_parser::{Expression, UnaryOperator};

/// Accepts logical expressions, comparisons and equality tests.
pub struct BoolExpressionChecker<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> BoolExpressionChecker<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// `==` and `!=` need both operands to be of the same checkable type.
    fn check_equality(&self, left: &Expression, right: &Expression) -> bool {
        let ints = IntExpressionChecker::new(self.symbols);
        let strings = StringExpressionChecker::new(self.symbols);

        (ints.check_expr(left) && ints.check_expr(right))
            || (strings.check_expr(left) && strings.check_expr(right))
            || (self.check_expr(left) && self.check_expr(right))
    }
}

impl ExpressionChecker for BoolExpressionChecker<'_> {
    fn target(&self) -> Type {
        Type::Bool
    }

    fn check_expr(&self, expr: &Expression) -> bool {
        match expr {
            Expression::Boolean { .. } => true,
            Expression::Integer { .. } | Expression::String { .. } => false,
            Expression::Identifier { name, .. } => {
                matches!(self.symbols.lookup(name), Some(Symbol::Bool(_)))
            }
            Expression::Binary {
                left,
                operator,
                right,
                ..
            } => {
                if operator.is_logical() {
                    self.check_expr(left) && self.check_expr(right)
                } else if operator.is_ordering() {
                    let ints = IntExpressionChecker::new(self.symbols);
                    ints.check_expr(left) && ints.check_expr(right)
                } else if operator.is_equality() {
                    self.check_equality(left, right)
                } else {
                    false
                }
            }
            Expression::Unary {
                operator, operand, ..
            } => *operator == UnaryOperator::Not && self.check_expr(operand),
            Expression::Call {
                callee, arguments, ..
            } => call_return_type(self.symbols, callee, arguments) == Some(Type::Bool),
        }
    }
}
