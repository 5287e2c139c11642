//! Source location tracking.
//!
//! `Span` records where a token, segment, or diagnostic sits inside a route
//! pattern so tooling can point at the offending text.

/// A byte range within a route pattern.
///
/// Route patterns are single-line, so a span is just a start and end offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at the given offset.
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Creates a span covering the range from this span to another.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
        }
    }

    /// Offset of the first byte.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.start
    }

    /// Returns the length of this span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers in the given pattern.
    ///
    /// Out-of-range spans yield an empty string rather than panicking.
    #[must_use]
    pub fn text<'a>(&self, pattern: &'a str) -> &'a str {
        pattern.get(self.start..self.end).unwrap_or("")
    }
}
