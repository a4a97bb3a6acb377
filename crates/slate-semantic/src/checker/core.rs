//! Core type checker structure.

use crate::analysis::FunctionReturnsChecker;
use crate::checker::loops::LoopContext;
use crate::symbol_table::SymbolTable;

/// Type checker for Slate programs.
///
/// Walks the AST once, depth first, populating the symbol table and
/// validating every statement. The first error stops the walk.
pub struct TypeChecker {
    /// Symbol table for tracking variables and functions
    pub(crate) symbols: SymbolTable,
    /// The function whose body is being checked, if any
    pub(crate) current_function: Option<FunctionContext>,
    /// Stack of loop contexts for break/continue validation
    pub(crate) loop_stack: Vec<LoopContext>,
}

/// State kept while checking one function body.
pub(crate) struct FunctionContext {
    pub(crate) name: String,
    pub(crate) returns: FunctionReturnsChecker,
}

impl TypeChecker {
    /// Creates a new type checker.
    pub fn new() -> Self {
        Self::with_symbols(SymbolTable::new())
    }

    /// Creates a new type checker with an existing symbol table.
    pub fn with_symbols(symbols: SymbolTable) -> Self {
        Self {
            symbols,
            current_function: None,
            loop_stack: Vec::new(),
        }
    }

    /// The symbol table as populated so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consumes the type checker and returns the symbol table.
    ///
    /// The table keeps every scope the analysis opened, ready to be handed
    /// to a later compilation stage.
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}
