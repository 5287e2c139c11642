//! argroute - Route pattern compiler and resolver
//!
//! This crate re-exports all layers of the argroute system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: argroute_runtime   - Route table files, `argroute` CLI, logging
//! Layer 1: argroute_resolver  - Registry, ranking, argument resolution
//! Layer 0: argroute_pattern   - Lexer, parser, validator, route compiler
//! ```

pub use argroute_pattern as pattern;
pub use argroute_resolver as resolver;
pub use argroute_runtime as runtime;
