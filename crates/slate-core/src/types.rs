//! The static types and compile-time values of Slate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Slate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// 32-bit signed integer
    Int,
    /// String
    String,
    /// Boolean
    Bool,
    /// Absence of a value; only valid as a function return type
    Void,
}

impl Type {
    /// The keyword naming this type in source code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Void => "void",
        }
    }

    /// The value a variable of this type holds when declared without an initializer.
    #[must_use]
    pub fn default_value(self) -> Option<Value> {
        match self {
            Self::Int => Some(Value::Int(0)),
            Self::String => Some(Value::String(String::new())),
            Self::Bool => Some(Value::Bool(false)),
            Self::Void => None,
        }
    }

    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Void)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value known at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Int(i32),
    String(String),
    Bool(bool),
}

impl Value {
    #[must_use]
    pub const fn ty(&self) -> Type {
        match self {
            Self::Int(_) => Type::Int,
            Self::String(_) => Type::String,
            Self::Bool(_) => Type::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value:?}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}
