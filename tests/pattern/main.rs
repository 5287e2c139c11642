//! Integration tests for Layer 0: Pattern
//!
//! Tests for the lexer, parser, validator, and compiler working together.

mod compiler;
mod parser;
mod validator;
