//! Argument list resolution.
//!
//! Every endpoint in the collection is tried against the arguments. Among
//! the routes that accept them, the winner is the one that needed the
//! fewest defaults, then the most specific, then the earliest registered.
//!
//! Matching one route runs three passes over a per-call `consumed` mask:
//!
//! 1. Repeated options collect every occurrence.
//! 2. Remaining options are found anywhere before a `--` argument.
//! 3. Literals and parameters walk the unconsumed arguments left to right.

use std::collections::HashMap;

use argroute_pattern::{CompiledRoute, OptionMatcher, ParameterMatcher, RouteMatcher};
use tracing::{debug, trace};

use crate::collection::EndpointCollection;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};

/// One extracted value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Index of the matcher that produced the value.
    pub slot: usize,
    /// Parameter name.
    pub name: String,
    /// Raw argument text.
    pub value: String,
}

/// A successful resolution.
#[derive(Debug)]
pub struct RouteMatch<'c, H> {
    /// The winning endpoint.
    pub endpoint: &'c Endpoint<H>,
    /// Values by name. Repeated values are joined with single spaces.
    pub values: HashMap<String, String>,
    /// Values in extraction order, one per occurrence.
    pub bindings: Vec<Binding>,
    /// Number of optional matchers that found nothing.
    pub defaults_used: usize,
}

impl<'c, H> RouteMatch<'c, H> {
    /// The winning endpoint's handler.
    #[must_use]
    pub fn handler(&self) -> &'c H {
        &self.endpoint.handler
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Yields each value bound to `name`, in argument order.
    pub fn values_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.bindings
            .iter()
            .filter(move |b| b.name == name)
            .map(|b| b.value.as_str())
    }
}

/// Outcome of matching a single route.
#[derive(Debug)]
struct Attempt {
    bindings: Vec<Binding>,
    defaults_used: usize,
}

/// Per-call matching state for one route.
struct MatchState<'a> {
    args: &'a [&'a str],
    route: &'a CompiledRoute,
    consumed: Vec<bool>,
    /// Options are not searched at or beyond this index.
    boundary: usize,
    bindings: Vec<Binding>,
    defaults_used: usize,
}

impl<'a> MatchState<'a> {
    fn new(args: &'a [&'a str], route: &'a CompiledRoute) -> Self {
        let boundary = if route.has_end_of_options() {
            args.iter().position(|a| *a == "--").unwrap_or(args.len())
        } else {
            args.len()
        };
        Self {
            args,
            route,
            consumed: vec![false; args.len()],
            boundary,
            bindings: Vec::new(),
            defaults_used: 0,
        }
    }

    fn bind(&mut self, slot: usize, name: &str, value: &str) {
        self.bindings.push(Binding {
            slot,
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn consume(&mut self, index: usize) -> &'a str {
        self.consumed[index] = true;
        self.args[index]
    }

    /// First unconsumed index at or after `from`.
    fn next_unconsumed(&self, from: usize) -> Option<usize> {
        (from..self.args.len()).find(|&i| !self.consumed[i])
    }

    /// First unconsumed occurrence of an option before the boundary.
    fn find_option(&self, option: &OptionMatcher, from: usize) -> Option<usize> {
        (from..self.boundary).find(|&i| !self.consumed[i] && option.matches(self.args[i]))
    }

    /// Index of the value for an option at `index`: the next unconsumed
    /// argument before the boundary that is not one of the route's options.
    fn value_after(&self, index: usize) -> Option<usize> {
        self.next_unconsumed(index + 1)
            .filter(|&i| i < self.boundary && !self.route.defines_option(self.args[i]))
    }

    /// Arguments that stand for route syntax rather than values.
    fn is_reserved(&self, arg: &str, seen_end_of_options: bool) -> bool {
        !seen_end_of_options
            && (self.route.defines_option(arg) || (arg == "--" && self.route.has_end_of_options()))
    }

    /// Pass 1: collect every occurrence of each repeated option.
    fn match_repeated(&mut self) -> Option<()> {
        let route = self.route;
        for (slot, matcher) in route.matchers.iter().enumerate() {
            let RouteMatcher::Option(option) = matcher else {
                continue;
            };
            if !option.is_repeated {
                continue;
            }
            let name = option.parameter_name.as_deref().unwrap_or_default();
            let mut found = 0;
            let mut from = 0;
            while let Some(index) = self.find_option(option, from) {
                self.consume(index);
                from = index + 1;
                found += 1;
                match self.value_after(index) {
                    Some(value_index) => {
                        let value = self.consume(value_index);
                        self.bind(slot, name, value);
                        from = value_index + 1;
                    }
                    None if option.parameter_is_optional => {}
                    None => return None,
                }
            }
            if found == 0 {
                self.defaults_used += 1;
            }
        }
        Some(())
    }

    /// Pass 2: find each remaining option anywhere before the boundary.
    fn match_options(&mut self) -> Option<()> {
        let route = self.route;
        for (slot, matcher) in route.matchers.iter().enumerate() {
            let RouteMatcher::Option(option) = matcher else {
                continue;
            };
            if option.is_repeated {
                continue;
            }
            let name = option.parameter_name.as_deref().unwrap_or_default();
            let Some(index) = self.find_option(option, 0) else {
                if !option.is_optional {
                    return None;
                }
                self.defaults_used += 1;
                if option.is_flag() {
                    self.bind(slot, name, "false");
                }
                continue;
            };
            self.consume(index);
            if option.is_flag() {
                self.bind(slot, name, "true");
                continue;
            }
            match self.value_after(index) {
                Some(value) => {
                    let value = self.consume(value);
                    self.bind(slot, name, value);
                }
                None if option.parameter_is_optional => self.defaults_used += 1,
                None => return None,
            }
        }
        Some(())
    }

    /// Pass 3: literals, parameters, and the catch-all, in pattern order.
    fn match_positionals(&mut self) -> Option<()> {
        let mut cursor = 0;
        let mut seen_end_of_options = false;

        let route = self.route;
        for (slot, matcher) in route.matchers.iter().enumerate() {
            match matcher {
                RouteMatcher::Option(_) => {}
                RouteMatcher::Literal(literal) if literal.is_end_of_options() => {
                    seen_end_of_options = true;
                    // A `--` argument must directly follow the positionals before it.
                    if self.boundary < self.args.len() {
                        if self.next_unconsumed(cursor) != Some(self.boundary) {
                            return None;
                        }
                        self.consume(self.boundary);
                        cursor = self.boundary + 1;
                    }
                }
                RouteMatcher::Literal(literal) => {
                    let index = self.next_unconsumed(cursor)?;
                    if self.args[index] != literal.value {
                        return None;
                    }
                    self.consume(index);
                    cursor = index + 1;
                }
                RouteMatcher::Parameter(parameter) if parameter.is_catch_all => {
                    self.match_catch_all(slot, parameter, cursor);
                    cursor = self.args.len();
                }
                RouteMatcher::Parameter(parameter) => {
                    let candidate = self
                        .next_unconsumed(cursor)
                        .filter(|&i| !self.is_reserved(self.args[i], seen_end_of_options));
                    match candidate {
                        Some(index) => {
                            let value = self.consume(index);
                            self.bind(slot, &parameter.name, value);
                            cursor = index + 1;
                        }
                        None if parameter.is_optional => self.defaults_used += 1,
                        None => return None,
                    }
                }
            }
        }
        Some(())
    }

    /// An empty catch-all is not a default; it binds `""`.
    fn match_catch_all(&mut self, slot: usize, parameter: &ParameterMatcher, cursor: usize) {
        while let Some(index) = self.next_unconsumed(cursor) {
            let value = self.consume(index);
            self.bind(slot, &parameter.name, value);
        }
    }

    fn finish(self) -> Option<Attempt> {
        let accepted = self.route.has_catch_all || self.consumed.iter().all(|c| *c);
        accepted.then_some(Attempt {
            bindings: self.bindings,
            defaults_used: self.defaults_used,
        })
    }
}

/// Picks the best endpoint for an argument list.
pub struct Resolver;

impl Resolver {
    /// Resolves `args` against every endpoint in `collection`.
    ///
    /// # Errors
    /// Returns a no-match error if no route accepts the arguments.
    pub fn resolve<'c, H, S: AsRef<str>>(
        args: &[S],
        collection: &'c EndpointCollection<H>,
    ) -> Result<RouteMatch<'c, H>> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let mut best: Option<(&'c Endpoint<H>, Attempt)> = None;

        for endpoint in collection {
            let Some(attempt) = Self::try_match(&args, &endpoint.route) else {
                trace!(pattern = %endpoint.pattern, "candidate rejected");
                continue;
            };
            trace!(
                pattern = %endpoint.pattern,
                defaults_used = attempt.defaults_used,
                "candidate accepted"
            );

            // The collection is already ranked by specificity and order, so
            // only fewer defaults can displace an earlier candidate.
            let better = best
                .as_ref()
                .is_none_or(|(_, current)| attempt.defaults_used < current.defaults_used);
            if better {
                let perfect = attempt.defaults_used == 0;
                best = Some((endpoint, attempt));
                if perfect {
                    break;
                }
            }
        }

        let Some((endpoint, attempt)) = best else {
            debug!(args = ?args, "no route matched");
            return Err(Error::no_match(&args));
        };
        debug!(
            pattern = %endpoint.pattern,
            defaults_used = attempt.defaults_used,
            "route matched"
        );

        let values = Self::collect_values(&endpoint.route, &attempt.bindings);
        Ok(RouteMatch {
            endpoint,
            values,
            bindings: attempt.bindings,
            defaults_used: attempt.defaults_used,
        })
    }

    /// Tries to match one route.
    fn try_match(args: &[&str], route: &CompiledRoute) -> Option<Attempt> {
        let mut state = MatchState::new(args, route);
        state.match_repeated()?;
        state.match_options()?;
        state.match_positionals()?;
        state.finish()
    }

    /// Folds bindings into the name map.
    fn collect_values(route: &CompiledRoute, bindings: &[Binding]) -> HashMap<String, String> {
        let mut values: HashMap<String, String> = HashMap::new();
        for binding in bindings {
            values
                .entry(binding.name.clone())
                .and_modify(|v| {
                    v.push(' ');
                    v.push_str(&binding.value);
                })
                .or_insert_with(|| binding.value.clone());
        }
        if let Some(name) = &route.catch_all_parameter_name {
            values.entry(name.clone()).or_default();
        }
        values
    }
}

/// Resolves `args` against `collection`.
///
/// # Errors
/// Returns a no-match error if no route accepts the arguments.
pub fn resolve<'c, H, S: AsRef<str>>(
    args: &[S],
    collection: &'c EndpointCollection<H>,
) -> Result<RouteMatch<'c, H>> {
    Resolver::resolve(args, collection)
}
