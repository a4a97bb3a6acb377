//! Utility functions shared across the CLI.

use anyhow::{Context, Result};
use colored::Colorize;
use slate_utils::Config;
use std::path::{Path, PathBuf};

/// Finds the Slate project root and config.
///
/// # Errors
/// Returns an error if not in a Slate project directory.
pub fn find_project() -> Result<(Config, PathBuf)> {
    Config::find().with_context(|| "Not in a Slate project directory")
}

/// Prints a status message with colored output.
pub fn print_status(status: &str, message: &str) {
    println!("{} {message}", status.green().bold());
}

/// Prints a status message with project info.
pub fn print_project_status(status: &str, config: &Config, path: &Path) {
    println!(
        "{} {} v{} ({})",
        status.green().bold(),
        config.package.name,
        config.package.version,
        path.display()
    );
}
