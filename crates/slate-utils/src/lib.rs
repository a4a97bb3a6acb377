//! Shared utilities for Slate tooling.

pub mod config;

pub use config::{Build, CONFIG_FILE, Config, Package};
