//! Implementation of the `slate symbols` command.

use anyhow::Result;
use slate_cli::Compiler;
use std::path::PathBuf;

/// Executes the `symbols` command, printing every scope and its symbols.
///
/// # Errors
/// Returns an error if the source cannot be read or contains errors.
pub fn execute(file: Option<PathBuf>) -> Result<()> {
    let compiler = Compiler::locate(file)?;
    let symbols = compiler.symbols()?;
    print!("{symbols}");
    Ok(())
}
