//! Analysis pipeline stages.
//!
//! Each stage renders its failure as a miette report on stderr and returns
//! a short summary error.

use anyhow::Result;
use miette::NamedSource;
use slate_core::Span;
use slate_lexer::{Token, tokenize};
use slate_parser::{Program, parse};
use slate_semantic::SymbolTable;

/// Prints a diagnostic for `error` against the source it came from.
fn report(error: slate_core::Error, name: &str, source: &str) {
    let report =
        miette::Report::new(error).with_source_code(NamedSource::new(name, source.to_string()));
    eprintln!("{report:?}");
}

/// Runs lexical analysis on source code.
///
/// # Errors
/// Returns an error if lexical analysis fails.
pub fn lex(source: &str, name: &str) -> Result<Vec<(Token, Span)>> {
    tokenize(source).map_err(|e| {
        report(e, name, source);
        anyhow::anyhow!("Lexical analysis failed")
    })
}

/// Runs parsing on tokens to produce an AST.
///
/// # Errors
/// Returns an error if parsing fails.
pub fn parse_tokens(tokens: &[(Token, Span)], source: &str, name: &str) -> Result<Program> {
    parse(tokens).map_err(|e| {
        report(e, name, source);
        anyhow::anyhow!("Parsing failed")
    })
}

/// Runs semantic analysis on the AST.
///
/// # Errors
/// Returns an error if semantic analysis fails.
pub fn analyze(program: &Program, source: &str, name: &str) -> Result<SymbolTable> {
    slate_semantic::analyze(program).map_err(|e| {
        report(e, name, source);
        anyhow::anyhow!("Semantic analysis failed")
    })
}

/// Runs every stage on `source` and returns the populated symbol table.
///
/// `name` labels the source in diagnostics.
///
/// # Errors
/// Returns an error if any stage fails.
pub fn check_pipeline(source: &str, name: &str) -> Result<SymbolTable> {
    let tokens = lex(source, name)?;
    let ast = parse_tokens(&tokens, source, name)?;
    analyze(&ast, source, name)
}
