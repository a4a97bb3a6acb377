//! Expression typing.
//!
//! - `detector`: infers the single type an expression yields, if any
//! - `int`, `string`, `boolean`: validate an expression against one target type
//! - `calls`: callee resolution and argument validation shared by all of them
//!
//! None of these report errors. Identifiers and calls are resolved by the
//! checker before an expression is handed to them, so they only answer
//! "does this fit" questions.

mod boolean;
mod calls;
mod detector;
mod int;
mod string;

pub use boolean::BoolExpressionChecker;
pub use calls::{arguments_match, call_return_type, call_signature};
pub use detector::ExpressionTypeDetector;
pub use int::IntExpressionChecker;
pub use string::StringExpressionChecker;

use crate::symbol_table::SymbolTable;
use slate_core::Type;
use slate_parser::Expression;

/// Validates that an expression yields values of one particular type.
pub trait ExpressionChecker {
    /// The type expressions are validated against.
    fn target(&self) -> Type;

    /// Returns whether `expr` is a well-formed expression of the target type.
    fn check_expr(&self, expr: &Expression) -> bool;
}

/// Checks `expr` with the checker for `ty`.
///
/// Nothing is ever a valid `void` expression here; procedure calls are only
/// accepted as expression statements, through the detector.
pub fn check_as(ty: Type, expr: &Expression, symbols: &SymbolTable) -> bool {
    match ty {
        Type::Int => IntExpressionChecker::new(symbols).check_expr(expr),
        Type::String => StringExpressionChecker::new(symbols).check_expr(expr),
        Type::Bool => BoolExpressionChecker::new(symbols).check_expr(expr),
        Type::Void => false,
    }
}
