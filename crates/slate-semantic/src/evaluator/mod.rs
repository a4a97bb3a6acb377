//! Compile-time evaluation of initializer expressions.
//!
//! Each evaluator computes a value together with whether it is static. A
//! non-static result carries the type's default value. Evaluators assume the
//! expression already passed the checker for their type.

mod boolean;
mod int;
mod string;

pub use boolean::BoolExpressionEvaluator;
pub use int::IntExpressionEvaluator;
pub use string::StringExpressionEvaluator;

use slate_parser::Expression;

/// The outcome of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<T> {
    pub value: T,
    /// Whether `value` is known at compile time.
    pub is_static: bool,
}

impl<T> Evaluation<T> {
    /// A statically known value.
    pub fn fixed(value: T) -> Self {
        Self {
            value,
            is_static: true,
        }
    }

    /// Combines two operands; the result is static only if both are.
    pub fn combine<U, R>(self, other: Evaluation<U>, op: impl FnOnce(T, U) -> R) -> Evaluation<R> {
        Evaluation {
            value: op(self.value, other.value),
            is_static: self.is_static && other.is_static,
        }
    }

    pub fn map<R>(self, op: impl FnOnce(T) -> R) -> Evaluation<R> {
        Evaluation {
            value: op(self.value),
            is_static: self.is_static,
        }
    }
}

impl<T: Default> Evaluation<T> {
    /// A value only known at run time.
    pub fn dynamic() -> Self {
        Self {
            value: T::default(),
            is_static: false,
        }
    }
}

/// Folds an expression of one type into a compile-time value.
pub trait ConstantEvaluator {
    type Output;

    fn evaluate(&self, expr: &Expression) -> Evaluation<Self::Output>;
}
