//! Return statement typing within one function body.

use crate::expressions::{ExpressionTypeDetector, check_as};
use crate::symbol_table::SymbolTable;
use slate_core::{Span, Type};
use slate_parser::Expression;
use thiserror::Error;

/// A `return` whose value disagrees with the function's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.expected, .found))]
pub struct ReturnMismatch {
    pub span: Span,
    pub expected: Type,
    /// What the return actually carried: `Some(Void)` for a bare `return;`,
    /// `None` when the value has no single type.
    pub found: Option<Type>,
}

fn describe(expected: &Type, found: &Option<Type>) -> String {
    match (*expected, *found) {
        (Type::Void, _) => "A void function cannot return a value.".to_string(),
        (expected, Some(Type::Void)) => {
            format!("Missing return value: expected an expression of type {expected}.")
        }
        (expected, Some(found)) => {
            format!("Expected a return value of type {expected}, found {found}.")
        }
        (expected, None) => {
            format!("Expected a return value of type {expected}, found mismatched types.")
        }
    }
}

/// Collects the return statements of one function body.
///
/// Returns must be inspected while the body's scopes are live, since their
/// values refer to locals. The first mismatch is kept.
#[derive(Debug)]
pub struct FunctionReturnsChecker {
    return_type: Type,
    inspected: usize,
    first_mismatch: Option<ReturnMismatch>,
}

impl FunctionReturnsChecker {
    pub fn new(return_type: Type) -> Self {
        Self {
            return_type,
            inspected: 0,
            first_mismatch: None,
        }
    }

    pub fn return_type(&self) -> Type {
        self.return_type
    }

    /// Number of return statements seen so far.
    pub fn inspected(&self) -> usize {
        self.inspected
    }

    /// Records one `return` statement with its optional value.
    pub fn inspect(&mut self, value: Option<&Expression>, span: Span, symbols: &SymbolTable) {
        self.inspected += 1;
        if self.first_mismatch.is_some() {
            return;
        }

        let found = match (self.return_type, value) {
            (Type::Void, None) => return,
            (expected, Some(expr)) if !expected.is_void() && check_as(expected, expr, symbols) => {
                return;
            }
            (_, Some(expr)) => ExpressionTypeDetector::new(symbols).detect(expr),
            (_, None) => Some(Type::Void),
        };

        self.first_mismatch = Some(ReturnMismatch {
            span,
            expected: self.return_type,
            found,
        });
    }

    /// Consumes the checker, reporting the first mismatch if there was one.
    ///
    /// # Errors
    /// Returns the first [`ReturnMismatch`] recorded by [`Self::inspect`].
    pub fn finish(self) -> Result<(), ReturnMismatch> {
        match self.first_mismatch {
            Some(mismatch) => Err(mismatch),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{expr, span};

    #[test]
    fn test_void_function_returns() {
        let table = SymbolTable::new();

        let mut checker = FunctionReturnsChecker::new(Type::Void);
        checker.inspect(None, span(), &table);
        assert!(checker.finish().is_ok());

        let mut checker = FunctionReturnsChecker::new(Type::Void);
        checker.inspect(Some(&expr("1")), span(), &table);
        let mismatch = checker.finish().unwrap_err();
        assert_eq!(mismatch.found, Some(Type::Int));
        assert_eq!(mismatch.to_string(), "A void function cannot return a value.");
    }

    #[test]
    fn test_valued_function_returns() {
        let table = SymbolTable::new();

        let mut checker = FunctionReturnsChecker::new(Type::Int);
        checker.inspect(Some(&expr("1 + 2")), span(), &table);
        checker.inspect(Some(&expr("getInt()")), span(), &table);
        assert_eq!(checker.inspected(), 2);
        assert!(checker.finish().is_ok());
    }

    #[test]
    fn test_first_mismatch_is_reported() {
        let table = SymbolTable::new();
        let mut checker = FunctionReturnsChecker::new(Type::Bool);

        checker.inspect(Some(&expr("true")), span(), &table);
        checker.inspect(Some(&expr("\"no\"")), span(), &table);
        checker.inspect(None, span(), &table);

        let mismatch = checker.finish().unwrap_err();
        assert_eq!(mismatch.expected, Type::Bool);
        assert_eq!(mismatch.found, Some(Type::String));
    }

    #[test]
    fn test_bare_return_in_valued_function() {
        let table = SymbolTable::new();
        let mut checker = FunctionReturnsChecker::new(Type::String);

        checker.inspect(None, span(), &table);

        let mismatch = checker.finish().unwrap_err();
        assert_eq!(mismatch.found, Some(Type::Void));
        assert!(mismatch.to_string().starts_with("Missing return value"));
    }
}
