//! Compiler for transforming a syntax tree into a [`CompiledRoute`].
//!
//! Compilation is a pure fold over segments: one matcher per segment, with
//! the specificity score accumulated along the way.

use crate::route::{CompiledRoute, LiteralMatcher, OptionMatcher, ParameterMatcher, RouteMatcher};
use crate::syntax::{OptionSegment, ParameterSegment, Segment, Syntax};

/// Weight of a literal segment.
pub const LITERAL_WEIGHT: i32 = 100;
/// Weight of an option without `?`.
pub const REQUIRED_OPTION_WEIGHT: i32 = 50;
/// Weight of an option declared with `?`.
pub const OPTIONAL_OPTION_WEIGHT: i32 = 25;
/// Weight of a required parameter with a type constraint.
pub const TYPED_PARAMETER_WEIGHT: i32 = 20;
/// Weight of a required parameter without a type constraint.
pub const UNTYPED_PARAMETER_WEIGHT: i32 = 10;
/// Weight of an optional parameter or option value.
pub const OPTIONAL_PARAMETER_WEIGHT: i32 = 5;
/// Weight of a catch-all.
pub const CATCH_ALL_WEIGHT: i32 = 1;

/// Turns syntax trees into compiled routes.
pub struct RouteCompiler;

impl RouteCompiler {
    /// Compiles a syntax tree.
    ///
    /// The tree is compiled as-is; run the validator first if the pattern
    /// must satisfy the route rules.
    #[must_use]
    pub fn compile(syntax: &Syntax) -> CompiledRoute {
        let mut route = CompiledRoute {
            matchers: Vec::with_capacity(syntax.segments.len()),
            specificity: 0,
            has_catch_all: false,
            catch_all_parameter_name: None,
        };

        for segment in &syntax.segments {
            let (matcher, weight) = match segment {
                Segment::Literal(l) => (
                    RouteMatcher::Literal(LiteralMatcher {
                        value: l.value.clone(),
                    }),
                    LITERAL_WEIGHT,
                ),
                Segment::Parameter(p) => {
                    if p.is_catch_all {
                        route.has_catch_all = true;
                        route.catch_all_parameter_name = Some(p.name.clone());
                    }
                    (compile_parameter(p), parameter_weight(p))
                }
                Segment::Option(o) => compile_option(o),
            };
            route.specificity += weight;
            route.matchers.push(matcher);
        }

        route
    }
}

/// Specificity contributed by a parameter.
fn parameter_weight(parameter: &ParameterSegment) -> i32 {
    if parameter.is_catch_all {
        CATCH_ALL_WEIGHT
    } else if parameter.is_optional {
        OPTIONAL_PARAMETER_WEIGHT
    } else if parameter.type_constraint.is_some() {
        TYPED_PARAMETER_WEIGHT
    } else {
        UNTYPED_PARAMETER_WEIGHT
    }
}

fn compile_parameter(parameter: &ParameterSegment) -> RouteMatcher {
    RouteMatcher::Parameter(ParameterMatcher {
        name: parameter.name.clone(),
        is_catch_all: parameter.is_catch_all,
        is_optional: parameter.is_optional,
        type_constraint: parameter.type_constraint.clone(),
        description: parameter.description.clone(),
    })
}

fn compile_option(option: &OptionSegment) -> (RouteMatcher, i32) {
    let (match_pattern, alternate_form) = match (&option.long_form, &option.short_form) {
        (Some(long), short) => (format!("--{long}"), short.as_ref().map(|s| format!("-{s}"))),
        (None, Some(short)) => (format!("-{short}"), None),
        (None, None) => (String::new(), None),
    };

    let value = option.parameter.as_ref();
    let expects_value = value.is_some();
    let is_repeated = option.is_repeated();

    let parameter_name = match value {
        Some(p) => Some(p.name.clone()),
        None => option
            .long_form
            .as_deref()
            .or(option.short_form.as_deref())
            .map(to_camel_case),
    };

    let mut weight = if option.is_optional {
        OPTIONAL_OPTION_WEIGHT
    } else {
        REQUIRED_OPTION_WEIGHT
    };
    if let Some(p) = value {
        weight += parameter_weight(p);
    }

    let matcher = OptionMatcher {
        match_pattern,
        alternate_form,
        expects_value,
        is_optional: option.is_optional || !expects_value || is_repeated,
        is_declared_optional: option.is_optional,
        is_repeated,
        parameter_name,
        parameter_is_optional: value.is_some_and(|p| p.is_optional),
        parameter_type: value.and_then(|p| p.type_constraint.clone()),
        description: option.description.clone(),
        parameter_description: value.and_then(|p| p.description.clone()),
    };

    (RouteMatcher::Option(matcher), weight)
}

/// Converts an option name such as `dry-run` or `no_cache` to `dryRun` / `noCache`.
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' || c == '_' {
            upper_next = !out.is_empty();
        } else if out.is_empty() {
            out.extend(c.to_lowercase());
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
