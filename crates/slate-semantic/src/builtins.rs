//! Functions provided by the runtime.

use crate::symbol::FunctionSignature;
use slate_core::Type;
use std::collections::HashMap;

const BUILTINS: &[(&str, &[Type], Type)] = &[
    ("put", &[Type::String], Type::Void),
    ("putInt", &[Type::Int], Type::Void),
    ("putBool", &[Type::Bool], Type::Void),
    ("getString", &[], Type::String),
    ("getInt", &[], Type::Int),
    ("getBool", &[], Type::Bool),
    ("intToString", &[Type::Int], Type::String),
    ("stringToInt", &[Type::String], Type::Int),
    ("stringLength", &[Type::String], Type::Int),
    ("exit", &[Type::Int], Type::Void),
];

/// Builds the registry of built-in function signatures keyed by name.
pub(crate) fn registry() -> HashMap<&'static str, FunctionSignature> {
    BUILTINS
        .iter()
        .map(|(name, params, return_type)| {
            (*name, FunctionSignature::new(params.to_vec(), *return_type))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let builtins = registry();

        assert_eq!(builtins.len(), 10);
        assert_eq!(
            builtins["stringLength"],
            FunctionSignature::new(vec![Type::String], Type::Int)
        );
        assert_eq!(
            builtins["getBool"],
            FunctionSignature::new(vec![], Type::Bool)
        );
        assert_eq!(builtins["exit"].return_type, Type::Void);
    }
}
