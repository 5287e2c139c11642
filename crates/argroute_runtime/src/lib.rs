//! The `argroute` command-line tool.
//!
//! This crate provides:
//! - [`RouteTable`] - TOML route tables and their registration
//! - [`commands`] - `check`, `explain`, and `resolve`
//! - [`cli`] - The binary's own subcommand routes
//! - [`logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod table;

pub use cli::{Command, Invocation, parse_args};
pub use commands::{Report, check, explain, resolve_args};
pub use table::{LoadedTable, RouteEntry, RouteTable};
