//! Whole-pattern semantic validation.
//!
//! Each rule runs independently over the full segment list and appends its
//! findings; one violation never hides another.

use std::collections::HashSet;

use crate::diagnostic::{SemanticError, SemanticErrorKind};
use crate::syntax::{ParameterSegment, Segment, Syntax};

/// Checks a parsed pattern against the route rules.
pub struct SemanticValidator;

impl SemanticValidator {
    /// Runs every rule and returns all violations.
    #[must_use]
    pub fn validate(syntax: &Syntax) -> Vec<SemanticError> {
        let mut errors = Vec::new();
        Self::check_duplicate_names(syntax, &mut errors);
        Self::check_consecutive_optionals(syntax, &mut errors);
        Self::check_catch_all_position(syntax, &mut errors);
        Self::check_end_of_options(syntax, &mut errors);
        Self::check_option_forms(syntax, &mut errors);
        Self::check_mixed_catch_all_and_optional(syntax, &mut errors);
        errors
    }

    /// Parameter names must be unique across positionals and option values.
    fn check_duplicate_names(syntax: &Syntax, errors: &mut Vec<SemanticError>) {
        let mut seen = HashSet::new();
        for parameter in all_parameters(syntax) {
            if !seen.insert(parameter.name.as_str()) {
                errors.push(SemanticError::new(
                    SemanticErrorKind::DuplicateParameterName(parameter.name.clone()),
                    parameter.span,
                ));
            }
        }
    }

    /// Two optional positionals with nothing between them are ambiguous.
    fn check_consecutive_optionals(syntax: &Syntax, errors: &mut Vec<SemanticError>) {
        let mut previous: Option<&ParameterSegment> = None;
        for segment in &syntax.segments {
            match segment {
                Segment::Parameter(p) if p.is_optional && !p.is_catch_all => {
                    if let Some(first) = previous {
                        errors.push(SemanticError::new(
                            SemanticErrorKind::ConsecutiveOptionalParameters {
                                first: first.name.clone(),
                                second: p.name.clone(),
                            },
                            p.span,
                        ));
                    }
                    previous = Some(p);
                }
                _ => previous = None,
            }
        }
    }

    /// Nothing positional may follow a catch-all.
    fn check_catch_all_position(syntax: &Syntax, errors: &mut Vec<SemanticError>) {
        let Some(index) = syntax
            .segments
            .iter()
            .position(|s| s.as_parameter().is_some_and(|p| p.is_catch_all))
        else {
            return;
        };
        let Segment::Parameter(catch_all) = &syntax.segments[index] else {
            return;
        };

        if let Some(offender) = syntax.segments[index + 1..]
            .iter()
            .find(|s| s.is_positional())
        {
            errors.push(SemanticError::new(
                SemanticErrorKind::CatchAllNotAtEnd(catch_all.name.clone()),
                offender.span(),
            ));
        }
    }

    /// `--` must be followed by a catch-all and by no options.
    fn check_end_of_options(syntax: &Syntax, errors: &mut Vec<SemanticError>) {
        let Some(index) = syntax.segments.iter().position(Segment::is_end_of_options) else {
            return;
        };
        let separator = &syntax.segments[index];
        let rest = &syntax.segments[index + 1..];

        for option in rest.iter().filter_map(Segment::as_option) {
            errors.push(SemanticError::new(
                SemanticErrorKind::OptionAfterEndOfOptions(option.display_form()),
                option.span,
            ));
        }

        let followed_by_catch_all = rest
            .first()
            .and_then(Segment::as_parameter)
            .is_some_and(|p| p.is_catch_all);
        if !followed_by_catch_all {
            errors.push(SemanticError::new(
                SemanticErrorKind::MissingCatchAllAfterEndOfOptions,
                separator.span(),
            ));
        }
    }

    /// Short aliases and long forms must be unique.
    fn check_option_forms(syntax: &Syntax, errors: &mut Vec<SemanticError>) {
        let mut shorts = HashSet::new();
        let mut longs = HashSet::new();
        for option in syntax.options() {
            if let Some(short) = &option.short_form {
                if !shorts.insert(short.as_str()) {
                    errors.push(SemanticError::new(
                        SemanticErrorKind::DuplicateShortAlias(short.clone()),
                        option.span,
                    ));
                }
            }
            if let Some(long) = &option.long_form {
                if !longs.insert(long.as_str()) {
                    errors.push(SemanticError::new(
                        SemanticErrorKind::DuplicateLongForm(long.clone()),
                        option.span,
                    ));
                }
            }
        }
    }

    /// A catch-all cannot share a route with optional parameters.
    fn check_mixed_catch_all_and_optional(syntax: &Syntax, errors: &mut Vec<SemanticError>) {
        let has_catch_all = syntax.parameters().any(|p| p.is_catch_all);
        let has_optional = all_parameters(syntax).any(|p| p.is_optional && !p.is_catch_all);
        if has_catch_all && has_optional {
            errors.push(SemanticError::new(
                SemanticErrorKind::MixedCatchAllWithOptional,
                syntax.span(),
            ));
        }
    }
}

/// Positional parameters and option value parameters, in pattern order.
fn all_parameters(syntax: &Syntax) -> impl Iterator<Item = &ParameterSegment> {
    syntax.segments.iter().filter_map(|segment| match segment {
        Segment::Parameter(p) => Some(p),
        Segment::Option(o) => o.parameter.as_ref(),
        Segment::Literal(_) => None,
    })
}
