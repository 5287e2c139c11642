//! Diagnostics produced while analyzing a route pattern.
//!
//! There are two independent channels. [`ParseError`]s describe lexical and
//! structural problems found by the parser; [`SemanticError`]s describe
//! whole-pattern rule violations found by the validator. Both accumulate and
//! neither stops analysis.

use std::fmt;

use thiserror::Error;

use crate::span::Span;

/// Categorized parse error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Malformed `{...}` parameter, including legacy `<name>` syntax.
    InvalidParameterSyntax,
    /// Missing or stray brace.
    UnbalancedBraces,
    /// Malformed `--long` / `-s` option.
    InvalidOptionFormat,
    /// Unknown type after `:`.
    InvalidTypeConstraint,
    /// Characters with no meaning in a pattern.
    InvalidCharacter,
    /// A token that cannot appear where it was found.
    UnexpectedToken,
    /// A parameter name that is not a valid identifier.
    InvalidIdentifier,
    /// Modifiers that contradict each other, such as `{*args?}`.
    InvalidModifierCombination,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidParameterSyntax => "invalid parameter syntax",
            Self::UnbalancedBraces => "unbalanced braces",
            Self::InvalidOptionFormat => "invalid option format",
            Self::InvalidTypeConstraint => "invalid type constraint",
            Self::InvalidCharacter => "invalid character",
            Self::UnexpectedToken => "unexpected token",
            Self::InvalidIdentifier => "invalid identifier",
            Self::InvalidModifierCombination => "invalid modifier combination",
        };
        f.write_str(name)
    }
}

/// A lexical or structural problem in a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at position {}: {message}", .span.start)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Human-readable detail.
    pub message: String,
    /// Offending text.
    pub span: Span,
    /// Replacement text the author probably meant.
    pub suggestion: Option<String>,
}

impl ParseError {
    /// Creates a parse error without a suggestion.
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            suggestion: None,
        }
    }

    /// Attaches a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Byte offset of the offending text.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Length of the offending text.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.span.len()
    }
}

/// Categorized semantic error kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SemanticErrorKind {
    /// A parameter name used more than once.
    DuplicateParameterName(String),
    /// Two optional positionals in a row.
    ConsecutiveOptionalParameters {
        /// The earlier optional parameter.
        first: String,
        /// The later optional parameter.
        second: String,
    },
    /// A positional segment after a catch-all.
    CatchAllNotAtEnd(String),
    /// An option declared after the `--` separator.
    OptionAfterEndOfOptions(String),
    /// `--` not immediately followed by a catch-all.
    MissingCatchAllAfterEndOfOptions,
    /// Two options sharing a short alias.
    DuplicateShortAlias(String),
    /// Two options sharing a long form.
    DuplicateLongForm(String),
    /// A catch-all combined with optional parameters.
    MixedCatchAllWithOptional,
}

impl fmt::Display for SemanticErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateParameterName(name) => write!(f, "duplicate parameter name '{name}'"),
            Self::ConsecutiveOptionalParameters { first, second } => write!(
                f,
                "optional parameters '{first}' and '{second}' are consecutive"
            ),
            Self::CatchAllNotAtEnd(name) => {
                write!(f, "catch-all '{name}' must be the last positional segment")
            }
            Self::OptionAfterEndOfOptions(option) => {
                write!(f, "option '{option}' appears after the '--' separator")
            }
            Self::MissingCatchAllAfterEndOfOptions => {
                f.write_str("'--' separator must be followed by a catch-all parameter")
            }
            Self::DuplicateShortAlias(alias) => write!(f, "duplicate short alias '-{alias}'"),
            Self::DuplicateLongForm(name) => write!(f, "duplicate option '--{name}'"),
            Self::MixedCatchAllWithOptional => {
                f.write_str("a route cannot combine a catch-all with optional parameters")
            }
        }
    }
}

/// A whole-pattern rule violation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} (at position {})", .span.start)]
pub struct SemanticError {
    /// Which rule was violated.
    pub kind: SemanticErrorKind,
    /// Segment the violation is reported against.
    pub span: Span,
}

impl SemanticError {
    /// Creates a semantic error.
    #[must_use]
    pub const fn new(kind: SemanticErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Human-readable detail.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
