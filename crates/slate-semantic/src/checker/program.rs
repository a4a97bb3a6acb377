//! Program and block type checking.

use crate::checker::core::TypeChecker;
use slate_core::Result;
use slate_parser::ast::{Block, Program, Statement};
use tracing::debug;

impl TypeChecker {
    /// Checks a complete program.
    ///
    /// Top-level statements are checked in order in the global scope, so a
    /// name can only be used after the statement declaring it.
    ///
    /// # Errors
    /// Returns the first semantic error found.
    pub fn check_program(&mut self, program: &Program) -> Result<()> {
        self.check_statements(&program.statements)?;
        debug!(
            scopes = self.symbols.scopes().len(),
            globals = self.symbols.global_scope().len(),
            "program checked"
        );
        Ok(())
    }

    /// Checks a block in its own scope.
    pub(crate) fn check_block(&mut self, block: &Block) -> Result<()> {
        self.symbols.enter_block_scope(block.span.start);
        self.check_statements(&block.statements)?;
        self.symbols.exit_scope()
    }

    /// Checks statements in the current scope.
    pub(crate) fn check_statements(&mut self, statements: &[Statement]) -> Result<()> {
        for statement in statements {
            self.check_statement(statement)?;
        }
        Ok(())
    }
}
