//! Statement type checking.

use crate::checker::core::TypeChecker;
use crate::expressions::{ExpressionTypeDetector, check_as};
use crate::symbol::Symbol;
use slate_core::{Error, Result, Span};
use slate_parser::ast::{Expression, Statement};
use tracing::warn;

impl TypeChecker {
    /// Checks a statement.
    pub(crate) fn check_statement(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Needs { module, span } => {
                warn!(module = %module, line = span.line(), "needs statements are not supported, skipping");
                Ok(())
            }

            Statement::Declaration {
                name,
                var_type,
                span,
            } => self.check_declaration(name, *var_type, *span),

            Statement::DeclarationAssign {
                name,
                var_type: Some(var_type),
                initializer,
                span,
            } => self.check_typed_declaration(name, *var_type, initializer, *span),

            Statement::DeclarationAssign {
                name,
                var_type: None,
                initializer,
                span,
            } => self.check_inferred_declaration(name, initializer, *span),

            Statement::Assignment { name, value, span } => {
                self.check_assignment(name, value, *span)
            }

            Statement::Function(func) => self.check_function(func),

            Statement::If(if_stmt) => self.check_if(if_stmt),

            Statement::While(while_loop) => self.check_while(while_loop),

            Statement::Block(block) => self.check_block(block),

            Statement::Return { value, span } => self.check_return(value.as_ref(), *span),

            Statement::Break { span } => self.check_break(*span),

            Statement::Continue { span } => self.check_continue(*span),

            Statement::Expression { expression, span } => {
                self.check_expression_statement(expression, *span)
            }

            Statement::Error { text, reason, span } => Err(Error::Syntax {
                text: text.clone(),
                reason: reason.clone(),
                span: *span,
            }),
        }
    }

    /// Checks an assignment statement.
    fn check_assignment(&mut self, name: &str, value: &Expression, span: Span) -> Result<()> {
        let expected = match self.symbols.lookup(name) {
            None => {
                return Err(Error::IllegalConstruct(
                    format!("Assignment to previously undeclared symbol {name}."),
                    span,
                ));
            }
            Some(Symbol::Function(_)) => {
                return Err(Error::IllegalConstruct(
                    format!("Cannot assign to {name}: it is a function."),
                    span,
                ));
            }
            Some(symbol) => symbol.value_type(),
        };
        let expected = expected
            .ok_or_else(|| Error::Internal(format!("variable {name} has no value type")))?;

        self.resolve_expression(value)?;
        if !check_as(expected, value, &self.symbols) {
            return Err(self.type_mismatch_error(expected, value, span));
        }

        Ok(())
    }

    /// Checks an expression statement. Any type is fine, `void` included.
    fn check_expression_statement(&mut self, expression: &Expression, span: Span) -> Result<()> {
        self.resolve_expression(expression)?;

        if ExpressionTypeDetector::new(&self.symbols)
            .detect(expression)
            .is_none()
        {
            return Err(Error::TypeMismatch(
                "Mismatched types in expression.".to_string(),
                span,
            ));
        }

        Ok(())
    }

    /// Checks a return statement against the enclosing function.
    fn check_return(&mut self, value: Option<&Expression>, span: Span) -> Result<()> {
        if self.current_function.is_none() {
            return Err(Error::IllegalConstruct(
                "Return statement must be within a function.".to_string(),
                span,
            ));
        }

        if let Some(expr) = value {
            self.resolve_expression(expr)?;
        }

        if let Some(context) = self.current_function.as_mut() {
            context.returns.inspect(value, span, &self.symbols);
        }
        Ok(())
    }
}
