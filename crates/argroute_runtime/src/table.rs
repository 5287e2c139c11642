//! Route table files.
//!
//! A route table is a TOML document listing patterns and the handler names
//! they dispatch to, plus the registry configuration to load them with:
//!
//! ```toml
//! [registry]
//! strict = true
//! allow_semantic_errors = false
//!
//! [[routes]]
//! pattern = "deploy {env} --force?"
//! handler = "deploy"
//! ```

use std::fs;
use std::path::Path;

use argroute_pattern::PatternDiagnostics;
use argroute_resolver::{EndpointCollection, Error, ErrorKind, RegistryConfig, Result, RouteRegistry};
use serde::Deserialize;
use tracing::{debug, info};

/// One `[[routes]]` entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RouteEntry {
    /// Route pattern.
    pub pattern: String,
    /// Name reported when the route wins.
    pub handler: String,
}

/// A parsed route table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteTable {
    /// Registration settings.
    pub registry: RegistryConfig,
    /// Routes in registration order.
    pub routes: Vec<RouteEntry>,
}

/// Result of registering every route in a table.
#[derive(Debug)]
pub struct LoadedTable {
    /// Accepted routes, ranked for resolution.
    pub collection: EndpointCollection<String>,
    /// Problems of routes that were registered anyway.
    pub diagnostics: Vec<PatternDiagnostics>,
    /// Problems of routes the registry refused.
    pub rejected: Vec<PatternDiagnostics>,
}

impl LoadedTable {
    /// Returns true if no route had any diagnostic.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.rejected.is_empty()
    }
}

impl RouteTable {
    /// Parses a route table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TOML is malformed or a route has
    /// an empty handler name.
    pub fn from_toml(content: &str) -> Result<Self> {
        let table: Self = toml::from_str(content)
            .map_err(|e| Error::config(format!("invalid route table: {e}")))?;
        if let Some(entry) = table.routes.iter().find(|r| r.handler.trim().is_empty()) {
            return Err(Error::config(format!(
                "route '{}' has an empty handler name",
                entry.pattern
            )));
        }
        Ok(table)
    }

    /// Reads and parses a route table file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration
    /// error if its contents are invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let table = Self::from_toml(&content).map_err(|e| match e.kind {
            ErrorKind::Config(message) => {
                Error::config(format!("{}: {message}", path.display()))
            }
            kind => Error::new(kind),
        })?;
        info!(path = %path.display(), routes = table.routes.len(), "route table loaded");
        Ok(table)
    }

    /// Registers every route, collecting rejections instead of stopping.
    #[must_use]
    pub fn register(&self) -> LoadedTable {
        let mut registry = RouteRegistry::with_config(self.registry.clone());
        let mut rejected = Vec::new();

        for entry in &self.routes {
            if let Err(err) = registry.register(&entry.pattern, entry.handler.clone()) {
                debug!(pattern = %entry.pattern, "{err}");
                if let ErrorKind::Pattern(inner) = err.kind {
                    rejected.extend(inner.diagnostics().cloned());
                }
            }
        }

        let diagnostics = registry.diagnostics().to_vec();
        LoadedTable {
            collection: registry.into_collection(),
            diagnostics,
            rejected,
        }
    }
}
