//! Command implementations for the Slate CLI.

pub mod check;
pub mod symbols;
