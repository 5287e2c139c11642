//! Error types for pattern analysis.
//!
//! Parse and semantic diagnostics are values, not errors. They only become an
//! [`Error`] when a caller asks for a pattern to be accepted strictly.

use std::fmt;

use thiserror::Error;

use crate::diagnostic::{ParseError, SemanticError};

/// Result alias for pattern operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for pattern operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid-pattern error.
    #[must_use]
    pub fn invalid_pattern(
        pattern: impl Into<String>,
        parse_errors: Vec<ParseError>,
        semantic_errors: Vec<SemanticError>,
    ) -> Self {
        Self::new(ErrorKind::InvalidPattern(PatternDiagnostics {
            pattern: pattern.into(),
            parse_errors,
            semantic_errors,
        }))
    }

    /// Returns the diagnostics if this is an invalid-pattern error.
    #[must_use]
    pub fn diagnostics(&self) -> Option<&PatternDiagnostics> {
        match &self.kind {
            ErrorKind::InvalidPattern(d) => Some(d),
        }
    }
}

/// Categorized error kinds.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The pattern has parse or semantic errors.
    #[error("{0}")]
    InvalidPattern(PatternDiagnostics),
}

/// Everything wrong with one pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternDiagnostics {
    /// The pattern as written.
    pub pattern: String,
    /// Lexical and structural problems.
    pub parse_errors: Vec<ParseError>,
    /// Rule violations.
    pub semantic_errors: Vec<SemanticError>,
}

impl PatternDiagnostics {
    /// Total number of problems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parse_errors.len() + self.semantic_errors.len()
    }

    /// Returns true if there are no problems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for PatternDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid route pattern '{}'", self.pattern)?;
        for error in &self.parse_errors {
            write!(f, "\n  {error}")?;
            if let Some(suggestion) = &error.suggestion {
                write!(f, " (did you mean '{suggestion}'?)")?;
            }
        }
        for error in &self.semantic_errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}
