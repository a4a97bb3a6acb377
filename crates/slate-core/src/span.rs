//! Source code span tracking for error reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source code: 1-based line and column plus the byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
        }
    }

    #[must_use]
    pub const fn with_offset(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    fn precedes(&self, other: &Self) -> bool {
        self.line < other.line || (self.line == other.line && self.column < other.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source code with start and end locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    #[must_use]
    pub const fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Line on which the span starts.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.start.line
    }

    /// Checks if a location is contained within this span.
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        !location.precedes(&self.start) && !self.end.precedes(&location)
    }

    /// Merges two spans into a single span covering both.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let start = if self.start.precedes(&other.start) {
            self.start
        } else {
            other.start
        };
        let end = if other.end.precedes(&self.end) {
            self.end
        } else {
            other.end
        };

        Self { start, end }
    }
}
