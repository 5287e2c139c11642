//! Route registration.
//!
//! A [`RouteRegistry`] collects patterns during startup. Converting it into an
//! [`EndpointCollection`] sorts the endpoints and ends the registration
//! phase; resolution only works on the collection.

use argroute_pattern::{PatternDiagnostics, analyze};
use tracing::{debug, warn};

use crate::collection::EndpointCollection;
use crate::config::RegistryConfig;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};

/// Registration-phase route store.
#[derive(Clone, Debug)]
pub struct RouteRegistry<H> {
    config: RegistryConfig,
    endpoints: Vec<Endpoint<H>>,
    diagnostics: Vec<PatternDiagnostics>,
}

impl<H> Default for RouteRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouteRegistry<H> {
    /// Creates an empty registry with the default (strict) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            endpoints: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Analyzes, compiles, and stores a route.
    ///
    /// # Errors
    /// Returns a pattern error if the configuration rejects the pattern's
    /// diagnostics. Accepted patterns with diagnostics are registered and
    /// their diagnostics kept for [`diagnostics`](Self::diagnostics).
    pub fn register(&mut self, pattern: &str, handler: H) -> Result<&Endpoint<H>> {
        let analysis = analyze(pattern);

        if self.config.rejects(&analysis) {
            debug!(pattern, "route rejected");
            let err = argroute_pattern::Error::invalid_pattern(
                analysis.pattern,
                analysis.parse_errors,
                analysis.semantic_errors,
            );
            return Err(Error::from(err));
        }

        let route = analysis.compile();
        let order = self.endpoints.len();
        debug!(pattern, specificity = route.specificity, order, "route registered");

        if !analysis.is_valid() {
            let diagnostics = PatternDiagnostics {
                pattern: analysis.pattern,
                parse_errors: analysis.parse_errors,
                semantic_errors: analysis.semantic_errors,
            };
            if self.config.warn_on_diagnostics {
                warn!(problems = diagnostics.len(), "{diagnostics}");
            }
            self.diagnostics.push(diagnostics);
        }

        self.endpoints.push(Endpoint::new(pattern, route, handler, order));
        Ok(&self.endpoints[order])
    }

    /// Diagnostics of routes that were registered despite problems.
    #[must_use]
    pub fn diagnostics(&self) -> &[PatternDiagnostics] {
        &self.diagnostics
    }

    /// Registered endpoints in registration order.
    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint<H>] {
        &self.endpoints
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns true if nothing was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Ends registration and ranks the endpoints.
    #[must_use]
    pub fn into_collection(self) -> EndpointCollection<H> {
        debug!(routes = self.endpoints.len(), "registration complete");
        EndpointCollection::sorted(self.endpoints)
    }
}

impl<H> From<RouteRegistry<H>> for EndpointCollection<H> {
    fn from(registry: RouteRegistry<H>) -> Self {
        registry.into_collection()
    }
}
