//! One-call pattern analysis.
//!
//! Runs the parser and the semantic validator over a pattern and keeps both
//! diagnostic channels side by side. The validator runs even when parsing
//! reported problems, so tooling sees everything in one pass.

use crate::compiler::RouteCompiler;
use crate::diagnostic::{ParseError, SemanticError};
use crate::error::{Error, Result};
use crate::parser::parse;
use crate::route::CompiledRoute;
use crate::syntax::Syntax;
use crate::validator::SemanticValidator;

/// Parse tree plus every diagnostic for one pattern.
#[derive(Clone, Debug)]
pub struct PatternAnalysis {
    /// The pattern as written.
    pub pattern: String,
    /// Best-effort syntax tree.
    pub syntax: Syntax,
    /// Lexical and structural problems.
    pub parse_errors: Vec<ParseError>,
    /// Rule violations.
    pub semantic_errors: Vec<SemanticError>,
}

impl PatternAnalysis {
    /// Returns true if both channels are empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.parse_errors.is_empty() && self.semantic_errors.is_empty()
    }

    /// Compiles the best-effort tree regardless of diagnostics.
    #[must_use]
    pub fn compile(&self) -> CompiledRoute {
        RouteCompiler::compile(&self.syntax)
    }

    /// Converts to the syntax tree, failing if any diagnostic was recorded.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidPattern`](crate::ErrorKind::InvalidPattern)
    /// carrying every diagnostic.
    pub fn into_syntax(self) -> Result<Syntax> {
        if self.is_valid() {
            Ok(self.syntax)
        } else {
            Err(Error::invalid_pattern(
                self.pattern,
                self.parse_errors,
                self.semantic_errors,
            ))
        }
    }
}

/// Parses and validates a pattern.
#[must_use]
pub fn analyze(pattern: &str) -> PatternAnalysis {
    let parsed = parse(pattern);
    let semantic_errors = SemanticValidator::validate(&parsed.syntax);
    PatternAnalysis {
        pattern: pattern.to_string(),
        syntax: parsed.syntax,
        parse_errors: parsed.errors,
        semantic_errors,
    }
}

/// Parses, validates, and compiles a pattern, rejecting any diagnostic.
///
/// # Errors
/// Returns an invalid-pattern error if the pattern has parse or semantic errors.
pub fn compile(pattern: &str) -> Result<CompiledRoute> {
    let syntax = analyze(pattern).into_syntax()?;
    Ok(RouteCompiler::compile(&syntax))
}
