//! Symbol table for tracking variables and functions during semantic analysis.

use crate::builtins;
use crate::symbol::{FunctionSignature, Symbol};
use slate_core::{Error, Location, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Index of a scope in the symbol table's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The program-wide scope every other scope descends from.
    pub const GLOBAL: ScopeId = ScopeId(0);

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_global(self) -> bool {
        self == Self::GLOBAL
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single lexical scope.
#[derive(Debug)]
pub struct Scope {
    id: ScopeId,
    parent: Option<ScopeId>,
    /// Start of the block that opened this scope, if any
    block_start: Option<Location>,
    symbols: Vec<Symbol>,
    by_name: HashMap<String, usize>,
}

impl Scope {
    fn new(id: ScopeId, parent: Option<ScopeId>, block_start: Option<Location>) -> Self {
        Self {
            id,
            parent,
            block_start,
            symbols: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn block_start(&self) -> Option<Location> {
        self.block_start
    }

    /// Symbols in declaration order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Looks up a name bound directly in this scope.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.by_name.get(name).map(|&index| &self.symbols[index])
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Symbol table for managing variable and function scopes.
///
/// Scopes live in an arena and are never removed: exiting a scope only moves
/// the cursor back to its parent, so the complete table remains readable once
/// analysis finishes. Built-in functions are kept apart from user symbols.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
    current: ScopeId,
    builtins: HashMap<&'static str, FunctionSignature>,
}

impl SymbolTable {
    /// Creates a new symbol table with a global scope and the built-in functions.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new(ScopeId::GLOBAL, None, None)],
            current: ScopeId::GLOBAL,
            builtins: builtins::registry(),
        }
    }

    /// Enters a new scope nested in the current one.
    pub fn enter_scope(&mut self) -> ScopeId {
        self.push_scope(None)
    }

    /// Enters a new scope for the block starting at `start`.
    pub fn enter_block_scope(&mut self, start: Location) -> ScopeId {
        self.push_scope(Some(start))
    }

    fn push_scope(&mut self, block_start: Option<Location>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes
            .push(Scope::new(id, Some(self.current), block_start));
        trace!(scope = id.0, parent = self.current.0, "enter scope");
        self.current = id;
        id
    }

    /// Exits the current scope, making its parent current again.
    ///
    /// # Errors
    /// Returns an internal error when called on the global scope.
    pub fn exit_scope(&mut self) -> Result<()> {
        let parent = self.current_scope().parent.ok_or_else(|| {
            Error::Internal("attempted to exit the global scope".to_string())
        })?;
        trace!(scope = self.current.0, parent = parent.0, "exit scope");
        self.current = parent;
        Ok(())
    }

    /// Defines a new symbol in the current scope.
    ///
    /// # Errors
    /// Returns a redeclaration error if the name is already bound in the
    /// current scope. Bindings in enclosing scopes are shadowed.
    pub fn define(&mut self, symbol: Symbol) -> Result<()> {
        let scope = &mut self.scopes[self.current.0];

        if let Some(existing) = scope.get(symbol.name()) {
            return Err(Error::Redeclaration(
                format!(
                    "Identifier {} was declared before on line {}.",
                    symbol.name(),
                    existing.line()
                ),
                symbol.span(),
            ));
        }

        scope
            .by_name
            .insert(symbol.name().to_string(), scope.symbols.len());
        scope.symbols.push(symbol);
        Ok(())
    }

    /// Looks up a symbol by name, searching from the current scope upwards.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.lookup_with_scope(name).map(|(symbol, _)| symbol)
    }

    /// Looks up a symbol and reports the scope it is bound in.
    ///
    /// A code generator uses the scope to tell globals from locals.
    pub fn lookup_with_scope(&self, name: &str) -> Option<(&Symbol, ScopeId)> {
        let mut cursor = Some(self.current);
        while let Some(id) = cursor {
            let scope = &self.scopes[id.0];
            if let Some(symbol) = scope.get(name) {
                return Some((symbol, id));
            }
            cursor = scope.parent;
        }
        None
    }

    /// Looks up a built-in function by name.
    pub fn lookup_builtin(&self, name: &str) -> Option<&FunctionSignature> {
        self.builtins.get(name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// All scopes, indexed by [`ScopeId`].
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)
    }

    pub fn global_scope(&self) -> &Scope {
        &self.scopes[ScopeId::GLOBAL.0]
    }

    pub fn current_scope(&self) -> &Scope {
        &self.scopes[self.current.0]
    }

    pub fn current_scope_id(&self) -> ScopeId {
        self.current
    }

    /// Returns the current scope depth (0 = global scope).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cursor = self.current_scope().parent;
        while let Some(id) = cursor {
            depth += 1;
            cursor = self.scopes[id.0].parent;
        }
        depth
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for scope in &self.scopes {
            match (scope.parent, scope.block_start) {
                (None, _) => writeln!(f, "scope {} (global)", scope.id)?,
                (Some(parent), Some(start)) => {
                    writeln!(f, "scope {} (parent {parent}, block at {start})", scope.id)?;
                }
                (Some(parent), None) => writeln!(f, "scope {} (parent {parent})", scope.id)?,
            }
            for symbol in &scope.symbols {
                writeln!(f, "  {symbol} (line {})", symbol.line())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::VariableSymbol;
    use slate_core::{Span, Type};

    fn at_line(line: usize) -> Span {
        Span::new(Location::new(line, 1), Location::new(line, 2))
    }

    fn int(name: &str, line: usize) -> Symbol {
        Symbol::Int(VariableSymbol::declared(name, at_line(line)))
    }

    fn string(name: &str, line: usize) -> Symbol {
        Symbol::String(VariableSymbol::declared(name, at_line(line)))
    }

    #[test]
    fn test_symbol_table_basic() {
        let mut table = SymbolTable::new();

        assert!(table.define(int("x", 1)).is_ok());

        let found = table.lookup("x").unwrap();
        assert_eq!(found.name(), "x");
        assert_eq!(found.value_type(), Some(Type::Int));
    }

    #[test]
    fn test_symbol_table_shadowing() {
        let mut table = SymbolTable::new();
        table.define(int("x", 1)).unwrap();

        table.enter_scope();
        table.define(string("x", 2)).unwrap();

        let found = table.lookup("x").unwrap();
        assert_eq!(found.value_type(), Some(Type::String));

        table.exit_scope().unwrap();

        let found = table.lookup("x").unwrap();
        assert_eq!(found.value_type(), Some(Type::Int));
    }

    #[test]
    fn test_symbol_table_duplicate_error() {
        let mut table = SymbolTable::new();
        table.define(int("x", 3)).unwrap();

        let err = table.define(string("x", 7)).unwrap_err();
        assert!(matches!(err, Error::Redeclaration(..)));
        assert_eq!(err.to_string(), "Identifier x was declared before on line 3.");
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_symbol_table_undefined() {
        let table = SymbolTable::new();
        assert!(table.lookup("undefined").is_none());
    }

    #[test]
    fn test_exit_global_scope_is_an_error() {
        let mut table = SymbolTable::new();
        assert!(matches!(table.exit_scope(), Err(Error::Internal(_))));
        assert_eq!(table.current_scope_id(), ScopeId::GLOBAL);
    }

    #[test]
    fn test_exited_scopes_stay_readable() {
        let mut table = SymbolTable::new();
        let inner = table.enter_block_scope(Location::new(4, 10));
        table.define(int("local", 5)).unwrap();
        table.exit_scope().unwrap();

        assert!(table.lookup("local").is_none());

        let scope = table.scope(inner).unwrap();
        assert_eq!(scope.parent(), Some(ScopeId::GLOBAL));
        assert_eq!(scope.block_start(), Some(Location::new(4, 10)));
        assert!(scope.get("local").is_some());
        assert_eq!(table.scopes().len(), 2);
    }

    #[test]
    fn test_sibling_scopes_are_independent() {
        let mut table = SymbolTable::new();

        table.enter_scope();
        table.define(int("a", 1)).unwrap();
        table.exit_scope().unwrap();

        table.enter_scope();
        assert!(table.lookup("a").is_none());
        table.define(string("a", 2)).unwrap();
        table.exit_scope().unwrap();
    }

    #[test]
    fn test_lookup_with_scope_and_depth() {
        let mut table = SymbolTable::new();
        table.define(int("g", 1)).unwrap();
        assert_eq!(table.depth(), 0);

        table.enter_scope();
        let inner = table.enter_scope();
        table.define(int("l", 3)).unwrap();
        assert_eq!(table.depth(), 2);

        let (_, scope) = table.lookup_with_scope("g").unwrap();
        assert!(scope.is_global());
        let (_, scope) = table.lookup_with_scope("l").unwrap();
        assert_eq!(scope, inner);
    }

    #[test]
    fn test_builtins_are_separate_from_user_symbols() {
        let table = SymbolTable::new();

        assert!(table.is_builtin("putInt"));
        assert_eq!(table.lookup_builtin("getInt").unwrap().return_type, Type::Int);
        assert!(table.lookup("putInt").is_none());
        assert!(table.global_scope().is_empty());
    }

    #[test]
    fn test_display_dump() {
        let mut table = SymbolTable::new();
        table.define(int("x", 1)).unwrap();
        table.enter_block_scope(Location::new(2, 5));
        table.define(string("s", 2)).unwrap();

        let dump = table.to_string();
        assert!(dump.contains("scope 0 (global)"));
        assert!(dump.contains("int x = 0 [static, default] (line 1)"));
        assert!(dump.contains("scope 1 (parent 0, block at 2:5)"));
        assert!(dump.contains("string s = \"\""));
    }
}
