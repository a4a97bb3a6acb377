//! Front-end driver.
//!
//! Pipeline: Source → Lexer → Parser → AST → Semantic → Symbol table

use crate::pipeline;
use crate::utils::{find_project, print_project_status, print_status};
use anyhow::{Context, Result};
use colored::Colorize;
use slate_semantic::SymbolTable;
use slate_utils::Config;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;

/// Runs the Slate front end over one source file.
pub struct Compiler {
    source_path: PathBuf,
    project: Option<(Config, PathBuf)>,
}

impl Compiler {
    /// Creates a compiler for a standalone source file.
    pub fn for_file(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            project: None,
        }
    }

    /// Creates a compiler for the entry file of a project.
    pub fn for_project(config: Config, project_root: PathBuf) -> Self {
        Self {
            source_path: config.entry_path(&project_root),
            project: Some((config, project_root)),
        }
    }

    /// Uses `file` if given, otherwise the entry file of the enclosing project.
    ///
    /// # Errors
    /// Returns an error if no file is given and no project can be found.
    pub fn locate(file: Option<PathBuf>) -> Result<Self> {
        match file {
            Some(path) => Ok(Self::for_file(path)),
            None => {
                let (config, root) = find_project()?;
                Ok(Self::for_project(config, root))
            }
        }
    }

    /// Returns the source file being analyzed.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Checks the source for errors.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or contains errors.
    pub fn check(&self) -> Result<Duration> {
        let start = Instant::now();

        match &self.project {
            Some((config, root)) => print_project_status("Checking", config, root),
            None => print_status("Checking", &self.source_path.display().to_string()),
        }

        let symbols = self.analyze()?;
        debug!(scopes = symbols.scopes().len(), "symbol table built");

        let duration = start.elapsed();
        self.print_check_success(duration);

        Ok(duration)
    }

    /// Analyzes the source and returns its symbol table.
    ///
    /// # Errors
    /// Returns an error if the source cannot be read or contains errors.
    pub fn symbols(&self) -> Result<SymbolTable> {
        self.analyze()
    }

    fn analyze(&self) -> Result<SymbolTable> {
        let source = self.read_source()?;
        pipeline::check_pipeline(&source, &self.source_name())
    }

    /// Reads the source file.
    fn read_source(&self) -> Result<String> {
        fs::read_to_string(&self.source_path)
            .with_context(|| format!("Failed to read {}", self.source_path.display()))
    }

    /// Name shown for the source in diagnostics.
    fn source_name(&self) -> String {
        self.source_path
            .file_name()
            .map_or_else(
                || self.source_path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Prints check success message.
    fn print_check_success(&self, duration: Duration) {
        println!(
            "    {} {} checked in {:.2}s",
            "Finished".green().bold(),
            self.source_name(),
            duration.as_secs_f64()
        );
    }
}
