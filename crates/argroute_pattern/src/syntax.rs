//! Syntax tree for route patterns.
//!
//! A pattern is an ordered sequence of [`Segment`]s. Each segment is an
//! immutable value that remembers the span it was parsed from.

use crate::span::Span;

/// A fixed word an argument must match exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralSegment {
    /// The word, e.g. `deploy`, or `--` for the end-of-options separator.
    pub value: String,
    /// Source location.
    pub span: Span,
}

/// A named placeholder, either positional or the value of an option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterSegment {
    /// Parameter name used as the key for extracted values.
    pub name: String,
    /// `{*name}` absorbs all remaining positional arguments.
    pub is_catch_all: bool,
    /// `{name?}` or `{name:type?}`.
    pub is_optional: bool,
    /// `--opt {name}*` may occur many times.
    pub is_repeated: bool,
    /// Type name after `:`, kept verbatim even when unknown.
    pub type_constraint: Option<String>,
    /// Text after `|`.
    pub description: Option<String>,
    /// Source location.
    pub span: Span,
}

impl ParameterSegment {
    /// Creates a required, untyped parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            is_catch_all: false,
            is_optional: false,
            is_repeated: false,
            type_constraint: None,
            description: None,
            span,
        }
    }
}

/// A `--long` / `-s` flag, optionally taking a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSegment {
    /// Long name without dashes.
    pub long_form: Option<String>,
    /// Short name without the dash.
    pub short_form: Option<String>,
    /// Text after `|`.
    pub description: Option<String>,
    /// Inline value parameter; `None` for boolean flags.
    pub parameter: Option<ParameterSegment>,
    /// Declared with a trailing `?`.
    pub is_optional: bool,
    /// Source location.
    pub span: Span,
}

impl OptionSegment {
    /// Returns true if this option takes a value.
    #[must_use]
    pub const fn expects_value(&self) -> bool {
        self.parameter.is_some()
    }

    /// Returns true if the option's value parameter is marked repeatable.
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        self.parameter.as_ref().is_some_and(|p| p.is_repeated)
    }

    /// The form users type most often: `--long` if present, else `-s`.
    #[must_use]
    pub fn display_form(&self) -> String {
        match (&self.long_form, &self.short_form) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => String::new(),
        }
    }
}

/// One element of a route pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Fixed word
    Literal(LiteralSegment),
    /// Positional placeholder
    Parameter(ParameterSegment),
    /// Flag or valued option
    Option(OptionSegment),
}

impl Segment {
    /// Returns the source span of this segment.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Literal(l) => l.span,
            Self::Parameter(p) => p.span,
            Self::Option(o) => o.span,
        }
    }

    /// Returns true for literals and positional parameters.
    #[must_use]
    pub const fn is_positional(&self) -> bool {
        !matches!(self, Self::Option(_))
    }

    /// Returns true if this is the `--` separator literal.
    #[must_use]
    pub fn is_end_of_options(&self) -> bool {
        matches!(self, Self::Literal(l) if l.value == "--")
    }

    /// Returns the parameter if this is a positional parameter.
    #[must_use]
    pub const fn as_parameter(&self) -> Option<&ParameterSegment> {
        match self {
            Self::Parameter(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the option if this is an option segment.
    #[must_use]
    pub const fn as_option(&self) -> Option<&OptionSegment> {
        match self {
            Self::Option(o) => Some(o),
            _ => None,
        }
    }

    /// A human-readable kind name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Parameter(_) => "parameter",
            Self::Option(_) => "option",
        }
    }

    /// Copy of this segment with every span reset.
    fn without_spans(&self) -> Self {
        let blank = Span::default();
        match self {
            Self::Literal(l) => Self::Literal(LiteralSegment {
                span: blank,
                ..l.clone()
            }),
            Self::Parameter(p) => Self::Parameter(ParameterSegment {
                span: blank,
                ..p.clone()
            }),
            Self::Option(o) => Self::Option(OptionSegment {
                span: blank,
                parameter: o.parameter.as_ref().map(|p| ParameterSegment {
                    span: blank,
                    ..p.clone()
                }),
                ..o.clone()
            }),
        }
    }
}

/// A parsed route pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Syntax {
    /// Segments in pattern order.
    pub segments: Vec<Segment>,
}

impl Syntax {
    /// Creates a syntax tree from segments.
    #[must_use]
    pub const fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Returns true if the pattern has no segments (the default route).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over positional parameters.
    pub fn parameters(&self) -> impl Iterator<Item = &ParameterSegment> {
        self.segments.iter().filter_map(Segment::as_parameter)
    }

    /// Iterates over option segments.
    pub fn options(&self) -> impl Iterator<Item = &OptionSegment> {
        self.segments.iter().filter_map(Segment::as_option)
    }

    /// Span covering every segment, or an empty span for the empty pattern.
    #[must_use]
    pub fn span(&self) -> Span {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => first.span().to(last.span()),
            _ => Span::default(),
        }
    }

    /// Structural equality ignoring source positions.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| a.without_spans() == b.without_spans())
    }
}
