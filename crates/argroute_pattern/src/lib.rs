//! Route pattern language for argroute.
//!
//! This crate turns a route pattern such as `deploy {env} --force?` into a
//! [`CompiledRoute`] that the resolver can match against command-line
//! arguments.
//!
//! # Pipeline
//!
//! ```text
//! "deploy {env:string} --tag,-t? {tag?}"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     LEXER       │  → [Identifier(deploy), LeftBrace, Identifier(env), Colon, ...]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     PARSER      │  → Syntax { Literal, Parameter, Option } + parse errors
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   VALIDATOR     │  → semantic errors (duplicates, catch-all placement, ...)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    COMPILER     │  → CompiledRoute { matchers, specificity: 150 }
//! └─────────────────┘
//! ```
//!
//! Each stage is total: malformed input produces diagnostics, never a panic.
//!
//! # Modules
//!
//! - [`span`] - Byte ranges into the pattern
//! - [`token`] / [`lexer`] - Tokenization
//! - [`syntax`] / [`parser`] - Syntax tree and error-recovering parser
//! - [`diagnostic`] - Parse and semantic diagnostics
//! - [`validator`] - Whole-pattern rules
//! - [`route`] / [`compiler`] - Match-ready routes and specificity scoring
//! - [`pretty`] - Canonical pattern text
//! - [`analysis`] - One-call analysis and strict compilation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analysis;
pub mod compiler;
pub mod diagnostic;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod route;
pub mod span;
pub mod syntax;
pub mod token;
pub mod validator;


// Re-export main types for convenience
pub use analysis::{PatternAnalysis, analyze, compile};
pub use compiler::RouteCompiler;
pub use diagnostic::{ParseError, ParseErrorKind, SemanticError, SemanticErrorKind};
pub use error::{Error, ErrorKind, PatternDiagnostics, Result};
pub use lexer::Lexer;
pub use parser::{KNOWN_TYPES, ParsedPattern, Parser, is_known_type, parse};
pub use route::{CompiledRoute, LiteralMatcher, OptionMatcher, ParameterMatcher, RouteMatcher};
pub use span::Span;
pub use syntax::{LiteralSegment, OptionSegment, ParameterSegment, Segment, Syntax};
pub use token::{Token, TokenKind};
pub use validator::SemanticValidator;
