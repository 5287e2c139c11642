//! Error types for registration and resolution.
//!
//! Uses `thiserror` the same way the pattern crate does: a struct carrying a
//! categorized [`ErrorKind`].

use thiserror::Error;

/// Result alias for resolver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for registration and resolution.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a no-match error for an argument list.
    #[must_use]
    pub fn no_match<S: AsRef<str>>(args: &[S]) -> Self {
        let args = args.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        Self::new(ErrorKind::NoMatch { args })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns true if no route matched.
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self.kind, ErrorKind::NoMatch { .. })
    }
}

impl From<argroute_pattern::Error> for Error {
    fn from(err: argroute_pattern::Error) -> Self {
        Self::new(ErrorKind::Pattern(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A pattern was rejected at registration.
    #[error(transparent)]
    Pattern(#[from] argroute_pattern::Error),

    /// No registered route accepts the arguments.
    #[error("no route matches '{args}'")]
    NoMatch {
        /// The arguments, space-joined.
        args: String,
    },

    /// Invalid registry or route table configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading a route table failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
