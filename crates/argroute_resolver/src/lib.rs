//! Route registration and argument resolution for argroute.
//!
//! This crate provides:
//! - [`RouteRegistry`] - Registration phase: analyze, compile, and store routes
//! - [`EndpointCollection`] - Frozen endpoints ranked by specificity
//! - [`Resolver`] - Picks the best endpoint for an argument list
//! - [`RegistryConfig`] - Which pattern diagnostics reject a route
//! - [`Error`] - Registration and resolution errors
//!
//! # Example
//!
//! ```
//! use argroute_resolver::{RouteRegistry, resolve};
//!
//! let mut registry = RouteRegistry::new();
//! registry.register("status", "status")?;
//! registry.register("deploy {env} --force?", "deploy")?;
//! let routes = registry.into_collection();
//!
//! let matched = resolve(&["deploy", "prod", "--force"], &routes)?;
//! assert_eq!(*matched.handler(), "deploy");
//! assert_eq!(matched.value("env"), Some("prod"));
//! assert_eq!(matched.value("force"), Some("true"));
//! # Ok::<(), argroute_resolver::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod registry;
pub mod resolver;

pub use collection::EndpointCollection;
pub use config::RegistryConfig;
pub use endpoint::Endpoint;
pub use error::{Error, ErrorKind, Result};
pub use registry::RouteRegistry;
pub use resolver::{Binding, Resolver, RouteMatch, resolve};
