//! Core types and utilities for the Slate compiler front end.
//!
//! This crate provides source spans, the shared error type and the small
//! type/value vocabulary used by every stage.

pub mod error;
pub mod span;
pub mod types;

pub use error::{Error, Result};
pub use span::{Location, Span};
pub use types::{Type, Value};
