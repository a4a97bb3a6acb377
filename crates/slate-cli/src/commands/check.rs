//! Implementation of the `slate check` command.

use anyhow::Result;
use slate_cli::Compiler;
use std::path::PathBuf;

/// Executes the `check` command on a file or the current project.
///
/// # Errors
/// Returns an error if the source cannot be read or contains errors.
pub fn execute(file: Option<PathBuf>) -> Result<()> {
    let compiler = Compiler::locate(file)?;
    compiler.check()?;
    Ok(())
}
