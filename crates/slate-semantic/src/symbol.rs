//! Symbols bound by declarations and function definitions.

use crate::evaluator::Evaluation;
use slate_core::{Span, Type, Value};
use std::fmt;

/// A variable of a single Slate type.
///
/// `value` starts as the type's default and is only refined once, from the
/// initializer, before the symbol is inserted into the table.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSymbol<T> {
    pub name: String,
    pub span: Span,
    /// The value held at declaration time.
    pub value: T,
    /// Whether `value` is known at compile time.
    pub value_known: bool,
    /// Whether the declaration carried an explicit initializer.
    pub has_initializer: bool,
}

impl<T: Default> VariableSymbol<T> {
    /// A variable declared without an initializer, holding the type's default.
    pub fn declared(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
            value: T::default(),
            value_known: true,
            has_initializer: false,
        }
    }

    /// A function parameter. Its value is only supplied at call time.
    pub fn parameter(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
            value: T::default(),
            value_known: false,
            has_initializer: false,
        }
    }
}

impl<T> VariableSymbol<T> {
    /// A variable declared with an initializer that has already been evaluated.
    pub fn initialized(name: impl Into<String>, span: Span, evaluation: Evaluation<T>) -> Self {
        Self {
            name: name.into(),
            span,
            value: evaluation.value,
            value_known: evaluation.is_static,
            has_initializer: true,
        }
    }

    /// The compile-time value, if one is known.
    pub fn known_value(&self) -> Option<&T> {
        self.value_known.then_some(&self.value)
    }
}

/// Parameter types and return type of something callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub params: Vec<Type>,
    pub return_type: Type,
}

impl FunctionSignature {
    pub fn new(params: Vec<Type>, return_type: Type) -> Self {
        Self {
            params,
            return_type,
        }
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<&str> = self.params.iter().map(|ty| ty.as_str()).collect();
        write!(f, "({}) -> {}", params.join(", "), self.return_type)
    }
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSymbol {
    pub name: String,
    pub span: Span,
    /// Parameters in declaration order. Never contains another function.
    pub params: Vec<Symbol>,
    pub return_type: Type,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>, span: Span, params: Vec<Symbol>, return_type: Type) -> Self {
        Self {
            name: name.into(),
            span,
            params,
            return_type,
        }
    }

    /// The signature used to check calls to this function.
    pub fn signature(&self) -> FunctionSignature {
        let params = self.params.iter().filter_map(Symbol::value_type).collect();
        FunctionSignature::new(params, self.return_type)
    }
}

/// Anything a name can be bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Int(VariableSymbol<i32>),
    String(VariableSymbol<String>),
    Bool(VariableSymbol<bool>),
    Function(FunctionSymbol),
}

impl Symbol {
    /// Creates a variable of type `ty` declared without an initializer.
    ///
    /// Returns `None` for `void`, which no variable may have.
    pub fn declared(ty: Type, name: impl Into<String>, span: Span) -> Option<Self> {
        match ty {
            Type::Int => Some(Self::Int(VariableSymbol::declared(name, span))),
            Type::String => Some(Self::String(VariableSymbol::declared(name, span))),
            Type::Bool => Some(Self::Bool(VariableSymbol::declared(name, span))),
            Type::Void => None,
        }
    }

    /// Creates a parameter symbol of type `ty`, or `None` for `void`.
    pub fn parameter(ty: Type, name: impl Into<String>, span: Span) -> Option<Self> {
        match ty {
            Type::Int => Some(Self::Int(VariableSymbol::parameter(name, span))),
            Type::String => Some(Self::String(VariableSymbol::parameter(name, span))),
            Type::Bool => Some(Self::Bool(VariableSymbol::parameter(name, span))),
            Type::Void => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Int(var) => &var.name,
            Self::String(var) => &var.name,
            Self::Bool(var) => &var.name,
            Self::Function(func) => &func.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Int(var) => var.span,
            Self::String(var) => var.span,
            Self::Bool(var) => var.span,
            Self::Function(func) => func.span,
        }
    }

    /// The 1-based line the symbol was declared on.
    pub fn line(&self) -> usize {
        self.span().line()
    }

    /// The type of the value this symbol names, or `None` for functions.
    pub fn value_type(&self) -> Option<Type> {
        match self {
            Self::Int(_) => Some(Type::Int),
            Self::String(_) => Some(Type::String),
            Self::Bool(_) => Some(Type::Bool),
            Self::Function(_) => None,
        }
    }

    /// The compile-time value of a variable, if known.
    pub fn known_value(&self) -> Option<Value> {
        match self {
            Self::Int(var) => var.known_value().map(|v| Value::Int(*v)),
            Self::String(var) => var.known_value().map(|v| Value::String(v.clone())),
            Self::Bool(var) => var.known_value().map(|v| Value::Bool(*v)),
            Self::Function(_) => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionSymbol> {
        match self {
            Self::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn flags<T>(var: &VariableSymbol<T>) -> &'static str {
            match (var.value_known, var.has_initializer) {
                (true, true) => "static, initialized",
                (true, false) => "static, default",
                (false, true) => "dynamic, initialized",
                (false, false) => "dynamic",
            }
        }

        match self {
            Self::Int(var) => write!(f, "int {} = {} [{}]", var.name, var.value, flags(var)),
            Self::String(var) => {
                write!(f, "string {} = {:?} [{}]", var.name, var.value, flags(var))
            }
            Self::Bool(var) => write!(f, "bool {} = {} [{}]", var.name, var.value, flags(var)),
            Self::Function(func) => {
                let params: Vec<String> = func
                    .params
                    .iter()
                    .map(|param| {
                        let ty = param.value_type().map_or("?", Type::as_str);
                        format!("{}: {ty}", param.name())
                    })
                    .collect();
                write!(
                    f,
                    "fn {}({}) -> {}",
                    func.name,
                    params.join(", "),
                    func.return_type
                )
            }
        }
    }
}
