//! Common test utilities for semantic analysis tests.

#![allow(dead_code)]

use slate_core::{Error, Result};
use slate_lexer::tokenize;
use slate_parser::parse;
use slate_semantic::{SymbolTable, analyze};

/// Helper function to lex, parse and analyze Slate source code.
///
/// # Returns
/// - `Ok(SymbolTable)` if every stage succeeds
/// - `Err(slate_core::Error)` if any stage fails
pub fn compile_and_analyze(source: &str) -> Result<SymbolTable> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    analyze(&program)
}

/// Helper function to get the error produced by source that must fail.
pub fn analysis_error(source: &str) -> Error {
    match compile_and_analyze(source) {
        Ok(_) => panic!("Expected analysis to fail for:\n{source}"),
        Err(err) => err,
    }
}

/// Helper function to check if source code fails semantic analysis.
pub fn should_fail(source: &str) -> bool {
    compile_and_analyze(source).is_err()
}

/// Helper function to check if source code passes semantic analysis.
pub fn should_pass(source: &str) -> bool {
    compile_and_analyze(source).is_ok()
}
