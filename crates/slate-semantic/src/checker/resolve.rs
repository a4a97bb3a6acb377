//! Name resolution inside expressions.
//!
//! Runs before an expression reaches the detector or a checker, which treat
//! unknown names as plain type failures. Resolution turns them into hard
//! errors and validates every call it meets.

use crate::checker::core::TypeChecker;
use crate::expressions::{ExpressionTypeDetector, call_signature, check_as};
use slate_core::{Error, Result, Span};
use slate_parser::ast::Expression;

impl TypeChecker {
    /// Resolves every identifier and call in an expression.
    pub(crate) fn resolve_expression(&self, expr: &Expression) -> Result<()> {
        match expr {
            Expression::Integer { .. } | Expression::String { .. } | Expression::Boolean { .. } => {
                Ok(())
            }

            Expression::Identifier { name, span } => match self.symbols.lookup(name) {
                Some(symbol) if symbol.is_function() => Err(Error::TypeMismatch(
                    format!("Function {name} cannot be used as a value."),
                    *span,
                )),
                Some(_) => Ok(()),
                None => Err(Error::UnresolvedIdentifier(
                    format!("Unknown identifier {name}."),
                    *span,
                )),
            },

            Expression::Binary { left, right, .. } => {
                self.resolve_expression(left)?;
                self.resolve_expression(right)
            }

            Expression::Unary { operand, .. } => self.resolve_expression(operand),

            Expression::Call {
                callee,
                arguments,
                span,
            } => {
                for argument in arguments {
                    self.resolve_expression(argument)?;
                }
                self.check_call(callee, arguments, *span)
            }
        }
    }

    /// Checks a call against its callee's signature.
    fn check_call(&self, callee: &str, arguments: &[Expression], span: Span) -> Result<()> {
        let signature = match call_signature(&self.symbols, callee) {
            Some(signature) => signature,
            None => {
                return Err(match self.symbols.lookup(callee) {
                    Some(_) => Error::TypeMismatch(
                        format!("Cannot call {callee}: it is not a function."),
                        span,
                    ),
                    None => Error::UnresolvedIdentifier(
                        format!("Unknown function {callee}."),
                        span,
                    ),
                });
            }
        };

        if signature.params.len() != arguments.len() {
            return Err(Error::TypeMismatch(
                format!(
                    "Function {callee} expects {} argument(s), found {}.",
                    signature.params.len(),
                    arguments.len()
                ),
                span,
            ));
        }

        for (index, (&expected, argument)) in signature.params.iter().zip(arguments).enumerate() {
            if !check_as(expected, argument, &self.symbols) {
                let found = ExpressionTypeDetector::new(&self.symbols)
                    .detect(argument)
                    .map_or_else(|| "mismatched types".to_string(), |ty| ty.to_string());
                return Err(Error::TypeMismatch(
                    format!(
                        "Argument {} of {callee} must be of type {expected}, found {found}.",
                        index + 1
                    ),
                    argument.span(),
                ));
            }
        }

        Ok(())
    }
}
