use super::{ConstantEvaluator, Evaluation};
use crate::symbol::Symbol;
use crate::symbol_table::SymbolTable;
use slate_parser::{BinaryOperator, Expression};

/// Folds string literals and concatenations.
pub struct StringExpressionEvaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> StringExpressionEvaluator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }
}

impl ConstantEvaluator for StringExpressionEvaluator<'_> {
    type Output = String;

    fn evaluate(&self, expr: &Expression) -> Evaluation<String> {
        match expr {
            Expression::String { value, .. } => Evaluation::fixed(value.clone()),
            Expression::Identifier { name, .. } => match self.symbols.lookup(name) {
                Some(Symbol::String(var)) => Evaluation {
                    value: var.value.clone(),
                    is_static: var.value_known,
                },
                _ => Evaluation::dynamic(),
            },
            Expression::Binary {
                left,
                operator: BinaryOperator::Add,
                right,
                ..
            } => self
                .evaluate(left)
                .combine(self.evaluate(right), |left, right| left + &right),
            _ => Evaluation::dynamic(),
        }
    }
}
