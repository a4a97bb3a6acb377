//! Helper functions to reduce code duplication.

use crate::checker::core::TypeChecker;
use crate::expressions::{BoolExpressionChecker, ExpressionChecker, ExpressionTypeDetector};
use slate_core::{Error, Result, Span, Type};
use slate_parser::ast::Expression;

impl TypeChecker {
    /// Creates a type mismatch error naming the type the expression was
    /// detected as, or "mismatched types" if it has none.
    pub(crate) fn type_mismatch_error(&self, expected: Type, expr: &Expression, span: Span) -> Error {
        let found = ExpressionTypeDetector::new(&self.symbols)
            .detect(expr)
            .map_or_else(|| "mismatched types".to_string(), |ty| ty.to_string());
        Error::TypeMismatch(
            format!("Expected {expected} expression on RHS, found {found}."),
            span,
        )
    }

    /// Validates a loop or branch condition.
    ///
    /// `construct` names the statement in the error message, `span` points
    /// at its keyword.
    pub(crate) fn check_bool_condition(
        &self,
        condition: &Expression,
        construct: &str,
        span: Span,
    ) -> Result<()> {
        self.resolve_expression(condition)?;

        if !BoolExpressionChecker::new(&self.symbols).check_expr(condition) {
            return Err(Error::TypeMismatch(
                format!("Invalid boolean expression in condition for {construct} statement."),
                span,
            ));
        }

        Ok(())
    }

    /// Rejects a declaration whose name is visible from the current scope.
    pub(crate) fn ensure_undeclared(&self, name: &str, span: Span) -> Result<()> {
        if let Some(existing) = self.symbols.lookup(name) {
            return Err(Error::Redeclaration(
                format!(
                    "Identifier {name} was declared before on line {}.",
                    existing.line()
                ),
                span,
            ));
        }
        Ok(())
    }
}
