//! Configuration for route registration.

use argroute_pattern::PatternAnalysis;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`RouteRegistry`](crate::RouteRegistry).
///
/// Controls which pattern diagnostics reject a route at registration time.
/// Diagnostics that do not reject a route are kept on the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RegistryConfig {
    /// Reject routes with diagnostics (false = register everything).
    pub strict: bool,

    /// In strict mode, still register routes whose only problems are semantic.
    pub allow_semantic_errors: bool,

    /// Log retained diagnostics as warnings.
    pub warn_on_diagnostics: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl RegistryConfig {
    /// Creates a configuration that rejects any diagnostic.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            allow_semantic_errors: false,
            warn_on_diagnostics: true,
        }
    }

    /// Creates a configuration that registers every pattern.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict: false,
            allow_semantic_errors: true,
            warn_on_diagnostics: true,
        }
    }

    /// Builder method to set strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method to tolerate semantic errors in strict mode.
    #[must_use]
    pub fn with_allow_semantic_errors(mut self, allow: bool) -> Self {
        self.allow_semantic_errors = allow;
        self
    }

    /// Builder method to enable/disable diagnostic warnings.
    #[must_use]
    pub fn with_warn_on_diagnostics(mut self, warn: bool) -> Self {
        self.warn_on_diagnostics = warn;
        self
    }

    /// Returns true if this configuration refuses the analyzed pattern.
    #[must_use]
    pub fn rejects(&self, analysis: &PatternAnalysis) -> bool {
        if !self.strict {
            return false;
        }
        !analysis.parse_errors.is_empty()
            || (!self.allow_semantic_errors && !analysis.semantic_errors.is_empty())
    }
}
