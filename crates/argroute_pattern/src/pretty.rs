//! Canonical pattern text.
//!
//! Both a [`Syntax`] and a [`CompiledRoute`] can be written back out as a
//! pattern string that parses to an equivalent tree. Help generators use the
//! compiled form since that is what endpoints keep.

use std::fmt::{self, Write};

use crate::route::{CompiledRoute, OptionMatcher, ParameterMatcher, RouteMatcher};
use crate::syntax::{OptionSegment, ParameterSegment, Segment, Syntax};

struct ParameterParts<'a> {
    name: &'a str,
    is_catch_all: bool,
    is_optional: bool,
    type_constraint: Option<&'a str>,
    description: Option<&'a str>,
}

fn write_parameter(out: &mut impl Write, parts: &ParameterParts<'_>) -> fmt::Result {
    out.write_char('{')?;
    if parts.is_catch_all {
        out.write_char('*')?;
    }
    out.write_str(parts.name)?;
    if let Some(ty) = parts.type_constraint {
        write!(out, ":{ty}")?;
    }
    if parts.is_optional {
        out.write_char('?')?;
    }
    if let Some(description) = parts.description {
        write!(out, "|{description}")?;
    }
    out.write_char('}')
}

struct OptionParts<'a> {
    long_form: Option<&'a str>,
    short_form: Option<&'a str>,
    is_optional: bool,
    description: Option<&'a str>,
    value: Option<ParameterParts<'a>>,
    is_repeated: bool,
}

fn write_option(out: &mut impl Write, parts: &OptionParts<'_>) -> fmt::Result {
    match (parts.long_form, parts.short_form) {
        (Some(long), Some(short)) => write!(out, "--{long},-{short}")?,
        (Some(long), None) => write!(out, "--{long}")?,
        (None, Some(short)) => write!(out, "-{short}")?,
        (None, None) => {}
    }
    if parts.is_optional {
        out.write_char('?')?;
    }
    if let Some(description) = parts.description {
        write!(out, "|{description}")?;
    }
    if let Some(value) = &parts.value {
        out.write_char(' ')?;
        write_parameter(out, value)?;
        if parts.is_repeated {
            out.write_char('*')?;
        }
    }
    Ok(())
}

fn segment_parameter(p: &ParameterSegment) -> ParameterParts<'_> {
    ParameterParts {
        name: &p.name,
        is_catch_all: p.is_catch_all,
        is_optional: p.is_optional,
        type_constraint: p.type_constraint.as_deref(),
        description: p.description.as_deref(),
    }
}

fn segment_option(o: &OptionSegment) -> OptionParts<'_> {
    OptionParts {
        long_form: o.long_form.as_deref(),
        short_form: o.short_form.as_deref(),
        is_optional: o.is_optional,
        description: o.description.as_deref(),
        value: o.parameter.as_ref().map(segment_parameter),
        is_repeated: o.is_repeated(),
    }
}

fn matcher_parameter(p: &ParameterMatcher) -> ParameterParts<'_> {
    ParameterParts {
        name: &p.name,
        is_catch_all: p.is_catch_all,
        is_optional: p.is_optional,
        type_constraint: p.type_constraint.as_deref(),
        description: p.description.as_deref(),
    }
}

fn matcher_option(o: &OptionMatcher) -> OptionParts<'_> {
    let (long_form, short_form) = match o.match_pattern.strip_prefix("--") {
        Some(long) => (
            Some(long),
            o.alternate_form.as_deref().and_then(|s| s.strip_prefix('-')),
        ),
        None => (None, o.match_pattern.strip_prefix('-')),
    };
    let value = if o.expects_value {
        o.parameter_name.as_deref().map(|name| ParameterParts {
            name,
            is_catch_all: false,
            is_optional: o.parameter_is_optional,
            type_constraint: o.parameter_type.as_deref(),
            description: o.parameter_description.as_deref(),
        })
    } else {
        None
    };
    OptionParts {
        long_form,
        short_form,
        is_optional: o.is_declared_optional,
        description: o.description.as_deref(),
        value,
        is_repeated: o.is_repeated,
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            match segment {
                Segment::Literal(l) => f.write_str(&l.value)?,
                Segment::Parameter(p) => write_parameter(f, &segment_parameter(p))?,
                Segment::Option(o) => write_option(f, &segment_option(o))?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for CompiledRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, matcher) in self.matchers.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            match matcher {
                RouteMatcher::Literal(l) => f.write_str(&l.value)?,
                RouteMatcher::Parameter(p) => write_parameter(f, &matcher_parameter(p))?,
                RouteMatcher::Option(o) => write_option(f, &matcher_option(o))?,
            }
        }
        Ok(())
    }
}

impl CompiledRoute {
    /// Re-derives a pattern string for this route.
    #[must_use]
    pub fn to_pattern(&self) -> String {
        self.to_string()
    }
}
