use super::{ConstantEvaluator, Evaluation};
use crate::symbol::Symbol;
use crate::symbol_table::SymbolTable;
use slate_parser::{BinaryOperator, Expression, UnaryOperator};

/// Folds integer expressions with 32-bit wrapping arithmetic.
pub struct IntExpressionEvaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> IntExpressionEvaluator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    fn binary(&self, left: &Expression, operator: BinaryOperator, right: &Expression) -> Evaluation<i32> {
        let left = self.evaluate(left);
        let right = self.evaluate(right);

        match operator {
            BinaryOperator::Add => left.combine(right, i32::wrapping_add),
            BinaryOperator::Subtract => left.combine(right, i32::wrapping_sub),
            BinaryOperator::Multiply => left.combine(right, i32::wrapping_mul),
            // A zero divisor is left for run time to report
            BinaryOperator::Divide if right.value != 0 => left.combine(right, i32::wrapping_div),
            BinaryOperator::Modulo if right.value != 0 => left.combine(right, i32::wrapping_rem),
            _ => Evaluation::dynamic(),
        }
    }
}

impl ConstantEvaluator for IntExpressionEvaluator<'_> {
    type Output = i32;

    fn evaluate(&self, expr: &Expression) -> Evaluation<i32> {
        match expr {
            Expression::Integer { value, .. } => Evaluation::fixed(*value),
            Expression::Identifier { name, .. } => match self.symbols.lookup(name) {
                Some(Symbol::Int(var)) => Evaluation {
                    value: var.value,
                    is_static: var.value_known,
                },
                _ => Evaluation::dynamic(),
            },
            Expression::Binary {
                left,
                operator,
                right,
                ..
            } => self.binary(left, *operator, right),
            Expression::Unary {
                operator: UnaryOperator::Negate,
                operand,
                ..
            } => self.evaluate(operand).map(i32::wrapping_neg),
            Expression::Unary { .. }
            | Expression::String { .. }
            | Expression::Boolean { .. }
            | Expression::Call { .. } => Evaluation::dynamic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dynamic_int, expr, static_int};

    fn eval(table: &SymbolTable, source: &str) -> Evaluation<i32> {
        IntExpressionEvaluator::new(table).evaluate(&expr(source))
    }

    #[test]
    fn test_fold_literals() {
        let table = SymbolTable::new();

        assert_eq!(eval(&table, "2 + 3"), Evaluation::fixed(5));
        assert_eq!(eval(&table, "2 + 3 * 4"), Evaluation::fixed(14));
        assert_eq!(eval(&table, "-(7 - 10)"), Evaluation::fixed(3));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        let table = SymbolTable::new();

        assert_eq!(eval(&table, "7 / 2").value, 3);
        assert_eq!(eval(&table, "-7 / 2").value, -3);
        assert_eq!(eval(&table, "-7 % 3").value, -1);
        assert_eq!(eval(&table, "7 % -3").value, 1);
    }

    #[test]
    fn test_overflow_wraps() {
        let table = SymbolTable::new();

        assert_eq!(eval(&table, "2147483647 + 1"), Evaluation::fixed(i32::MIN));
        assert_eq!(eval(&table, "-2147483648 / -1"), Evaluation::fixed(i32::MIN));
        assert_eq!(eval(&table, "-(-2147483648)"), Evaluation::fixed(i32::MIN));
    }

    #[test]
    fn test_division_by_zero_is_not_static() {
        let table = SymbolTable::new();

        let result = eval(&table, "10 / 0");
        assert!(!result.is_static);
        assert_eq!(result.value, 0);
        assert!(!eval(&table, "10 % (5 - 5)").is_static);
    }

    #[test]
    fn test_identifiers_fold_transitively() {
        let mut table = SymbolTable::new();
        table.define(static_int("a", 4)).unwrap();
        table.define(dynamic_int("p")).unwrap();

        assert_eq!(eval(&table, "a * a"), Evaluation::fixed(16));
        assert!(!eval(&table, "a + p").is_static);
    }

    #[test]
    fn test_calls_are_never_static() {
        let table = SymbolTable::new();

        let result = eval(&table, "getInt() + 1");
        assert!(!result.is_static);
    }
}
