//! Variable declaration checking.

use crate::checker::core::TypeChecker;
use crate::evaluator::{
    BoolExpressionEvaluator, ConstantEvaluator, IntExpressionEvaluator,
    StringExpressionEvaluator,
};
use crate::expressions::{ExpressionTypeDetector, check_as};
use crate::symbol::{Symbol, VariableSymbol};
use slate_core::{Error, Result, Span, Type};
use slate_parser::ast::Expression;
use tracing::debug;

impl TypeChecker {
    /// Checks `let name: T;`.
    pub(crate) fn check_declaration(&mut self, name: &str, var_type: Type, span: Span) -> Result<()> {
        self.ensure_undeclared(name, span)?;
        let symbol = Symbol::declared(var_type, name, span).ok_or_else(|| void_variable(span))?;

        debug!(name, ty = %var_type, "declare");
        self.symbols.define(symbol)
    }

    /// Checks `let name: T = initializer;`.
    pub(crate) fn check_typed_declaration(
        &mut self,
        name: &str,
        var_type: Type,
        initializer: &Expression,
        span: Span,
    ) -> Result<()> {
        self.ensure_undeclared(name, span)?;
        if var_type.is_void() {
            return Err(void_variable(span));
        }

        self.resolve_expression(initializer)?;
        if !check_as(var_type, initializer, &self.symbols) {
            return Err(self.type_mismatch_error(var_type, initializer, span));
        }

        self.define_initialized(name, var_type, initializer, span)
    }

    /// Checks `let name = initializer;`, taking the type from the initializer.
    pub(crate) fn check_inferred_declaration(
        &mut self,
        name: &str,
        initializer: &Expression,
        span: Span,
    ) -> Result<()> {
        self.ensure_undeclared(name, span)?;
        self.resolve_expression(initializer)?;

        let var_type = ExpressionTypeDetector::new(&self.symbols)
            .detect(initializer)
            .ok_or_else(|| {
                Error::TypeMismatch(
                    "Incompatible types in expression on RHS. All terms should be of the same type."
                        .to_string(),
                    span,
                )
            })?;
        if var_type.is_void() {
            return Err(Error::IllegalConstruct(
                format!("Cannot infer a type for {name} from an expression of type void."),
                span,
            ));
        }
        if !check_as(var_type, initializer, &self.symbols) {
            return Err(self.type_mismatch_error(var_type, initializer, span));
        }

        self.define_initialized(name, var_type, initializer, span)
    }

    /// Evaluates the initializer and binds the resulting variable.
    fn define_initialized(
        &mut self,
        name: &str,
        var_type: Type,
        initializer: &Expression,
        span: Span,
    ) -> Result<()> {
        let symbol = match var_type {
            Type::Int => Symbol::Int(VariableSymbol::initialized(
                name,
                span,
                IntExpressionEvaluator::new(&self.symbols).evaluate(initializer),
            )),
            Type::String => Symbol::String(VariableSymbol::initialized(
                name,
                span,
                StringExpressionEvaluator::new(&self.symbols).evaluate(initializer),
            )),
            Type::Bool => Symbol::Bool(VariableSymbol::initialized(
                name,
                span,
                BoolExpressionEvaluator::new(&self.symbols).evaluate(initializer),
            )),
            Type::Void => return Err(void_variable(span)),
        };

        debug!(
            name,
            ty = %var_type,
            value = ?symbol.known_value(),
            "declare with initializer"
        );
        self.symbols.define(symbol)
    }
}

fn void_variable(span: Span) -> Error {
    Error::IllegalConstruct(
        "Void types for variable declarations are not allowed.".to_string(),
        span,
    )
}
