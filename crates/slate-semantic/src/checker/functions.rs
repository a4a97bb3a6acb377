//! Function definition checking.

use crate::analysis::{FunctionReturnsChecker, returns_on_all_paths};
use crate::checker::core::{FunctionContext, TypeChecker};
use crate::symbol::{FunctionSymbol, Symbol};
use slate_core::{Error, Result};
use slate_parser::ast::Function;
use tracing::debug;

impl TypeChecker {
    /// Checks a function definition.
    ///
    /// A function with a declared return type is bound before its body is
    /// checked, so it may call itself. A procedure without one is bound after.
    /// Parameters and the body's statements share a single scope.
    pub(crate) fn check_function(&mut self, func: &Function) -> Result<()> {
        let name = func.name.as_str();
        if self.symbols.is_builtin(name) {
            return Err(Error::Redeclaration(
                format!("{name} is a built-in function and cannot be redefined."),
                func.span,
            ));
        }
        self.ensure_undeclared(name, func.span)?;

        let return_type = func.effective_return_type();
        let symbol = FunctionSymbol::new(name, func.span, parameter_symbols(func)?, return_type);
        debug!(name, signature = %symbol.signature(), "define function");

        let binds_early = func.return_type.is_some();
        if binds_early {
            self.symbols.define(Symbol::Function(symbol.clone()))?;
        }

        self.symbols.enter_block_scope(func.body.span.start);
        for param in &symbol.params {
            self.symbols.define(param.clone())?;
        }

        let outer = self.current_function.replace(FunctionContext {
            name: name.to_string(),
            returns: FunctionReturnsChecker::new(return_type),
        });
        let body = self.check_statements(&func.body.statements);
        let context = std::mem::replace(&mut self.current_function, outer);
        body?;
        self.symbols.exit_scope()?;

        let context = context.ok_or_else(|| {
            Error::Internal(format!("lost the context of function {name}"))
        })?;
        debug!(
            function = %context.name,
            returns = context.returns.inspected(),
            "function body checked"
        );
        context
            .returns
            .finish()
            .map_err(|mismatch| Error::ReturnTypeMismatch(mismatch.to_string(), mismatch.span))?;

        if !return_type.is_void() && !returns_on_all_paths(&func.body) {
            return Err(Error::IncompleteReturn(
                format!(
                    "Not all possible execution paths in function {name} return a value of type {return_type}."
                ),
                func.span,
            ));
        }

        if !binds_early {
            self.symbols.define(Symbol::Function(symbol))?;
        }
        Ok(())
    }
}

/// Builds the parameter symbols of a function, rejecting `void` parameters.
fn parameter_symbols(func: &Function) -> Result<Vec<Symbol>> {
    func.params
        .iter()
        .map(|param| {
            Symbol::parameter(param.param_type, &param.name, param.span).ok_or_else(|| {
                Error::IllegalConstruct(
                    format!("Parameter {} of {} cannot be of type void.", param.name, func.name),
                    param.span,
                )
            })
        })
        .collect()
}
