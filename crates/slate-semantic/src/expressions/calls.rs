//! Call resolution shared by the detector and the per-type checkers.

use super::check_as;
use crate::symbol::{FunctionSignature, Symbol};
use crate::symbol_table::SymbolTable;
use slate_core::Type;
use slate_parser::Expression;

/// Resolves a callee to its signature. Built-ins take precedence over user symbols.
pub fn call_signature(symbols: &SymbolTable, callee: &str) -> Option<FunctionSignature> {
    if let Some(builtin) = symbols.lookup_builtin(callee) {
        return Some(builtin.clone());
    }
    symbols
        .lookup(callee)
        .and_then(Symbol::as_function)
        .map(|func| func.signature())
}

/// Returns whether the arguments fit the signature in number and type.
pub fn arguments_match(
    symbols: &SymbolTable,
    signature: &FunctionSignature,
    arguments: &[Expression],
) -> bool {
    signature.params.len() == arguments.len()
        && signature
            .params
            .iter()
            .zip(arguments)
            .all(|(&ty, argument)| check_as(ty, argument, symbols))
}

/// The type a call yields, or `None` if the callee is unknown or the
/// arguments do not fit.
pub fn call_return_type(
    symbols: &SymbolTable,
    callee: &str,
    arguments: &[Expression],
) -> Option<Type> {
    let signature = call_signature(symbols, callee)?;
    arguments_match(symbols, &signature, arguments).then_some(signature.return_type)
}
