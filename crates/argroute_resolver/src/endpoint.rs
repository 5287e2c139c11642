//! Registered routes.

use argroute_pattern::CompiledRoute;

/// A compiled route bound to a caller-supplied handler.
///
/// The handler is opaque to this crate; the resolver only hands it back.
#[derive(Clone, Debug)]
pub struct Endpoint<H> {
    /// The pattern as registered.
    pub pattern: String,
    /// The compiled form of `pattern`.
    pub route: CompiledRoute,
    /// Caller data returned on a match.
    pub handler: H,
    /// Registration index; breaks specificity ties.
    pub order: usize,
}

impl<H> Endpoint<H> {
    /// Creates an endpoint.
    #[must_use]
    pub fn new(pattern: impl Into<String>, route: CompiledRoute, handler: H, order: usize) -> Self {
        Self {
            pattern: pattern.into(),
            route,
            handler,
            order,
        }
    }

    /// Ranking score of the route.
    #[must_use]
    pub fn specificity(&self) -> i32 {
        self.route.specificity
    }
}
