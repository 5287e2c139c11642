//! Integration tests for Layer 1: Resolver
//!
//! Tests for registration, ranking, and resolution.

mod concurrency;
mod properties;
mod routing;
