//! Frozen, ranked endpoint sets.

use std::slice;

use crate::endpoint::Endpoint;

/// Endpoints ordered for resolution.
///
/// Built from a [`RouteRegistry`](crate::RouteRegistry). Endpoints are sorted
/// by specificity, highest first, with registration order breaking ties. The
/// collection cannot be modified afterwards, so every resolution sees the
/// same ranking.
#[derive(Clone, Debug)]
pub struct EndpointCollection<H> {
    endpoints: Vec<Endpoint<H>>,
}

impl<H> EndpointCollection<H> {
    /// Sorts endpoints into resolution order.
    pub(crate) fn sorted(mut endpoints: Vec<Endpoint<H>>) -> Self {
        // Stable, and ties fall back to registration order explicitly.
        endpoints.sort_by(|a, b| {
            b.specificity()
                .cmp(&a.specificity())
                .then_with(|| a.order.cmp(&b.order))
        });
        Self { endpoints }
    }

    /// Number of endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns true if no endpoints were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Endpoints in resolution order.
    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint<H>] {
        &self.endpoints
    }

    /// Iterates over endpoints in resolution order.
    pub fn iter(&self) -> slice::Iter<'_, Endpoint<H>> {
        self.endpoints.iter()
    }

    /// Finds the endpoint registered with exactly this pattern.
    #[must_use]
    pub fn find(&self, pattern: &str) -> Option<&Endpoint<H>> {
        self.endpoints.iter().find(|e| e.pattern == pattern)
    }
}

impl<'a, H> IntoIterator for &'a EndpointCollection<H> {
    type Item = &'a Endpoint<H>;
    type IntoIter = slice::Iter<'a, Endpoint<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
