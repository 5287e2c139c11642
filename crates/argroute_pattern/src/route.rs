//! Compiled, match-ready routes.
//!
//! A [`CompiledRoute`] is built once per pattern and never changes. Besides
//! the resolver, help and completion generators read it, which is why the
//! matchers keep descriptions and type names around.

/// Matches one fixed word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralMatcher {
    /// Word to compare against, case-sensitively.
    pub value: String,
}

impl LiteralMatcher {
    /// Returns true if this literal is the `--` separator.
    #[must_use]
    pub fn is_end_of_options(&self) -> bool {
        self.value == "--"
    }
}

/// Binds one positional argument, or all remaining ones for a catch-all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterMatcher {
    /// Key for the extracted value.
    pub name: String,
    /// Absorbs every remaining positional argument.
    pub is_catch_all: bool,
    /// May be absent.
    pub is_optional: bool,
    /// Declared type name.
    pub type_constraint: Option<String>,
    /// Help text.
    pub description: Option<String>,
}

/// Finds a flag anywhere in the argument list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionMatcher {
    /// Primary form, `--long` or `-s` for short-only options.
    pub match_pattern: String,
    /// `-s` when both forms are declared.
    pub alternate_form: Option<String>,
    /// Consumes the following argument as its value.
    pub expects_value: bool,
    /// May be absent at runtime. Always true for flags and repeated options.
    pub is_optional: bool,
    /// Declared with `?` in the pattern.
    pub is_declared_optional: bool,
    /// May occur many times; values are collected in order.
    pub is_repeated: bool,
    /// Key for the extracted value. Derived from the long form for flags.
    pub parameter_name: Option<String>,
    /// The value itself may be omitted after the flag.
    pub parameter_is_optional: bool,
    /// Declared value type.
    pub parameter_type: Option<String>,
    /// Help text for the option.
    pub description: Option<String>,
    /// Help text for the value.
    pub parameter_description: Option<String>,
}

impl OptionMatcher {
    /// Returns true if `arg` is one of this option's forms.
    #[must_use]
    pub fn matches(&self, arg: &str) -> bool {
        self.match_pattern == arg || self.alternate_form.as_deref() == Some(arg)
    }

    /// Returns true for value-less flags.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        !self.expects_value
    }
}

/// One compiled segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteMatcher {
    /// Fixed word
    Literal(LiteralMatcher),
    /// Positional placeholder
    Parameter(ParameterMatcher),
    /// Flag or valued option
    Option(OptionMatcher),
}

impl RouteMatcher {
    /// Returns the option matcher, if this is one.
    #[must_use]
    pub const fn as_option(&self) -> Option<&OptionMatcher> {
        match self {
            Self::Option(o) => Some(o),
            _ => None,
        }
    }

    /// Name of the value this matcher binds, if any.
    #[must_use]
    pub fn binding_name(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Parameter(p) => Some(&p.name),
            Self::Option(o) => o.parameter_name.as_deref(),
        }
    }
}

/// A route ready for matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledRoute {
    /// Matchers in pattern order.
    pub matchers: Vec<RouteMatcher>,
    /// Ranking score; higher wins.
    pub specificity: i32,
    /// The route ends in a catch-all.
    pub has_catch_all: bool,
    /// Name of the catch-all parameter.
    pub catch_all_parameter_name: Option<String>,
}

impl CompiledRoute {
    /// Iterates over option matchers.
    pub fn options(&self) -> impl Iterator<Item = &OptionMatcher> {
        self.matchers.iter().filter_map(RouteMatcher::as_option)
    }

    /// Returns true if `arg` is a form of an option this route declares.
    #[must_use]
    pub fn defines_option(&self, arg: &str) -> bool {
        self.options().any(|o| o.matches(arg))
    }

    /// Returns true if the route contains the `--` separator.
    #[must_use]
    pub fn has_end_of_options(&self) -> bool {
        self.matchers
            .iter()
            .any(|m| matches!(m, RouteMatcher::Literal(l) if l.is_end_of_options()))
    }

    /// Names of every value the route can bind, in pattern order.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<&str> {
        self.matchers
            .iter()
            .filter_map(RouteMatcher::binding_name)
            .collect()
    }
}
