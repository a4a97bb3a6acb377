//! Semantic analysis for Slate programs.
//!
//! This crate resolves every name to the scope that declares it, checks that
//! expressions are type consistent, folds constant initializers and verifies
//! that functions returning a value do so on every path. It operates on the
//! AST produced by the parser and yields the populated symbol table.

pub mod analysis;
mod builtins;
mod checker;
pub mod evaluator;
pub mod expressions;
mod symbol;
mod symbol_table;
#[cfg(test)]
mod test_support;

pub use checker::TypeChecker;
pub use evaluator::Evaluation;
pub use symbol::{FunctionSignature, FunctionSymbol, Symbol, VariableSymbol};
pub use symbol_table::{Scope, ScopeId, SymbolTable};

use slate_core::Result;
use slate_parser::ast::Program;

/// Performs semantic analysis on a Slate program.
///
/// # Returns
/// The symbol table with every scope the program opened.
///
/// # Errors
/// Returns the first semantic error found:
/// - Redeclared names, including built-in function names
/// - Unknown identifiers or functions
/// - Type mismatches in declarations, assignments, conditions and calls
/// - `void` variables, `break`/`continue` outside a loop
/// - Missing or mistyped return values
///
/// # Examples
/// ```
/// use slate_lexer::tokenize;
/// use slate_parser::parse;
/// use slate_semantic::{Symbol, analyze};
///
/// let tokens = tokenize("let x: int = 2 + 3;").unwrap();
/// let program = parse(&tokens).unwrap();
/// let symbols = analyze(&program).unwrap();
///
/// let Some(Symbol::Int(x)) = symbols.lookup("x") else { panic!() };
/// assert_eq!(x.value, 5);
/// assert!(x.value_known);
/// ```
#[tracing::instrument(skip_all, fields(statements = program.statements.len()))]
pub fn analyze(program: &Program) -> Result<SymbolTable> {
    let mut checker = TypeChecker::new();
    checker.check_program(program)?;
    Ok(checker.into_symbols())
}
