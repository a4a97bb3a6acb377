use super::{
    ConstantEvaluator, Evaluation, IntExpressionEvaluator, StringExpressionEvaluator,
};
use crate::expressions::ExpressionTypeDetector;
use crate::symbol::Symbol;
use crate::symbol_table::SymbolTable;
use slate_core::Type;
use slate_parser::{BinaryOperator, Expression, UnaryOperator};

/// Folds logical expressions, comparisons and equality tests.
///
/// Both operands of `&&` and `||` are always evaluated.
pub struct BoolExpressionEvaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> BoolExpressionEvaluator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    fn compare(&self, left: &Expression, operator: BinaryOperator, right: &Expression) -> Evaluation<bool> {
        let ints = IntExpressionEvaluator::new(self.symbols);
        ints.evaluate(left)
            .combine(ints.evaluate(right), |left, right| match operator {
                BinaryOperator::Less => left < right,
                BinaryOperator::LessEqual => left <= right,
                BinaryOperator::Greater => left > right,
                _ => left >= right,
            })
    }

    fn equals(&self, left: &Expression, right: &Expression) -> Evaluation<bool> {
        let operand = ExpressionTypeDetector::new(self.symbols).detect(left);
        match operand {
            Some(Type::Int) => {
                let ints = IntExpressionEvaluator::new(self.symbols);
                ints.evaluate(left).combine(ints.evaluate(right), |l, r| l == r)
            }
            Some(Type::String) => {
                let strings = StringExpressionEvaluator::new(self.symbols);
                strings
                    .evaluate(left)
                    .combine(strings.evaluate(right), |l, r| l == r)
            }
            Some(Type::Bool) => self
                .evaluate(left)
                .combine(self.evaluate(right), |l, r| l == r),
            Some(Type::Void) | None => Evaluation::dynamic(),
        }
    }
}

impl ConstantEvaluator for BoolExpressionEvaluator<'_> {
    type Output = bool;

    fn evaluate(&self, expr: &Expression) -> Evaluation<bool> {
        match expr {
            Expression::Boolean { value, .. } => Evaluation::fixed(*value),
            Expression::Identifier { name, .. } => match self.symbols.lookup(name) {
                Some(Symbol::Bool(var)) => Evaluation {
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
            } => match operator {
                BinaryOperator::And => self
                    .evaluate(left)
                    .combine(self.evaluate(right), |l, r| l && r),
                BinaryOperator::Or => self
                    .evaluate(left)
                    .combine(self.evaluate(right), |l, r| l || r),
                BinaryOperator::Equal => self.equals(left, right),
                BinaryOperator::NotEqual => self.equals(left, right).map(|equal| !equal),
                op if op.is_ordering() => self.compare(left, *op, right),
                _ => Evaluation::dynamic(),
            },
            Expression::Unary {
                operator: UnaryOperator::Not,
                operand,
                ..
            } => self.evaluate(operand).map(|value| !value),
            _ => Evaluation::dynamic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dynamic_int, expr, static_bool, static_int, static_string};

    fn eval(table: &SymbolTable, source: &str) -> Evaluation<bool> {
        BoolExpressionEvaluator::new(table).evaluate(&expr(source))
    }

    #[test]
    fn test_logical_operators() {
        let mut table = SymbolTable::new();
        table.define(static_bool("yes", true)).unwrap();

        assert_eq!(eval(&table, "yes && !false"), Evaluation::fixed(true));
        assert_eq!(eval(&table, "!yes || false"), Evaluation::fixed(false));
    }

    #[test]
    fn test_comparisons_fold_through_ints() {
        let mut table = SymbolTable::new();
        table.define(static_int("limit", 10)).unwrap();

        assert_eq!(eval(&table, "3 * 3 < limit"), Evaluation::fixed(true));
        assert_eq!(eval(&table, "limit >= 11"), Evaluation::fixed(false));
    }

    #[test]
    fn test_equality_per_operand_type() {
        let mut table = SymbolTable::new();
        table.define(static_string("s", "abc")).unwrap();

        assert_eq!(eval(&table, "1 + 1 == 2"), Evaluation::fixed(true));
        assert_eq!(eval(&table, "s != \"abc\""), Evaluation::fixed(false));
        assert_eq!(eval(&table, "true == (1 < 2)"), Evaluation::fixed(true));
    }

    #[test]
    fn test_dynamic_operand_spreads() {
        let mut table = SymbolTable::new();
        table.define(dynamic_int("p")).unwrap();

        // No short-circuit at compile time
        assert!(!eval(&table, "false && p > 0").is_static);
        assert!(!eval(&table, "getBool()").is_static);
    }
}
