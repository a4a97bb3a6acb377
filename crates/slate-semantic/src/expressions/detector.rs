use super::call_return_type;
use crate::symbol_table::SymbolTable;
use slate_core::Type;
use slate_parser::{BinaryOperator, Expression, UnaryOperator};

/// Infers the type an expression yields.
///
/// Returns `None` when operands disagree, an operator does not apply to its
/// operand type, an identifier names a function, or a call does not fit its
/// callee.
pub struct ExpressionTypeDetector<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> ExpressionTypeDetector<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    pub fn detect(&self, expr: &Expression) -> Option<Type> {
        match expr {
            Expression::Integer { .. } => Some(Type::Int),
            Expression::String { .. } => Some(Type::String),
            Expression::Boolean { .. } => Some(Type::Bool),
            Expression::Identifier { name, .. } => self.symbols.lookup(name)?.value_type(),
            Expression::Binary {
                left,
                operator,
                right,
                ..
            } => {
                let left = self.detect(left)?;
                let right = self.detect(right)?;
                if left != right {
                    return None;
                }
                binary_result(*operator, left)
            }
            Expression::Unary {
                operator, operand, ..
            } => match (operator, self.detect(operand)?) {
                (UnaryOperator::Negate, Type::Int) => Some(Type::Int),
                (UnaryOperator::Not, Type::Bool) => Some(Type::Bool),
                _ => None,
            },
            Expression::Call {
                callee, arguments, ..
            } => call_return_type(self.symbols, callee, arguments),
        }
    }
}

/// Result type of `operator` applied to two operands of type `operand`.
fn binary_result(operator: BinaryOperator, operand: Type) -> Option<Type> {
    match operator {
        BinaryOperator::Add if matches!(operand, Type::Int | Type::String) => Some(operand),
        op if op.is_arithmetic() && operand == Type::Int => Some(Type::Int),
        op if op.is_ordering() && operand == Type::Int => Some(Type::Bool),
        op if op.is_equality() && !operand.is_void() => Some(Type::Bool),
        op if op.is_logical() && operand == Type::Bool => Some(Type::Bool),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{FunctionSymbol, Symbol};
    use crate::test_support::{expr, span, static_bool, static_int, static_string};

    fn symbols() -> SymbolTable {
        let mut table = SymbolTable::new();
        table.define(static_int("n", 1)).unwrap();
        table.define(static_string("s", "a")).unwrap();
        table.define(static_bool("b", true)).unwrap();
        table
            .define(Symbol::Function(FunctionSymbol::new(
                "twice",
                span(),
                vec![static_int("x", 0)],
                Type::Int,
            )))
            .unwrap();
        table
    }

    #[test]
    fn test_detect_homogeneous_expressions() {
        let table = symbols();
        let detector = ExpressionTypeDetector::new(&table);

        assert_eq!(detector.detect(&expr("n * 2 - 1")), Some(Type::Int));
        assert_eq!(detector.detect(&expr("s + \"x\"")), Some(Type::String));
        assert_eq!(detector.detect(&expr("n < 3 && !b")), Some(Type::Bool));
        assert_eq!(detector.detect(&expr("s == \"a\"")), Some(Type::Bool));
        assert_eq!(detector.detect(&expr("-n")), Some(Type::Int));
    }

    #[test]
    fn test_detect_rejects_mixed_operands() {
        let table = symbols();
        let detector = ExpressionTypeDetector::new(&table);

        assert_eq!(detector.detect(&expr("n + s")), None);
        assert_eq!(detector.detect(&expr("s - s")), None);
        assert_eq!(detector.detect(&expr("b + b")), None);
        assert_eq!(detector.detect(&expr("s < s")), None);
        assert_eq!(detector.detect(&expr("!n")), None);
        assert_eq!(detector.detect(&expr("unknown")), None);
    }

    #[test]
    fn test_detect_calls() {
        let table = symbols();
        let detector = ExpressionTypeDetector::new(&table);

        assert_eq!(detector.detect(&expr("twice(2)")), Some(Type::Int));
        assert_eq!(detector.detect(&expr("intToString(n)")), Some(Type::String));
        assert_eq!(detector.detect(&expr("putInt(n)")), Some(Type::Void));
        assert_eq!(detector.detect(&expr("twice(s)")), None);
        assert_eq!(detector.detect(&expr("twice(1, 2)")), None);
        assert_eq!(detector.detect(&expr("putInt(1) == putInt(2)")), None);
        // A function name is not a value
        assert_eq!(detector.detect(&expr("twice")), None);
    }
}
