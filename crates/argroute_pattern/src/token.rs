//! Token types for route patterns.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Location of this token in the pattern.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Byte offset of the token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Length of the token in bytes.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.span.len()
    }

    /// Returns the identifier text if this is an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true if a new segment may begin at this token.
    ///
    /// Used by the parser to resynchronize after a malformed segment.
    #[must_use]
    pub const fn starts_segment(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::LeftBrace
                | TokenKind::SingleDash
                | TokenKind::DoubleDash
                | TokenKind::EndOfOptions
                | TokenKind::EndOfInput
        )
    }
}

/// Token types for route patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A literal word, parameter/option name, type name, or description word.
    Identifier(String),
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `:`
    Colon,
    /// `?`
    Question,
    /// `*`
    Asterisk,
    /// `|`
    Pipe,
    /// `,`
    Comma,
    /// `-` directly before an option name
    SingleDash,
    /// `--` directly before an option name
    DoubleDash,
    /// A standalone `--`
    EndOfOptions,
    /// Unrecognized text, kept verbatim for diagnostics
    Invalid(String),
    /// End of input
    EndOfInput,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "identifier",
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
            Self::Colon => "':'",
            Self::Question => "'?'",
            Self::Asterisk => "'*'",
            Self::Pipe => "'|'",
            Self::Comma => "','",
            Self::SingleDash => "'-'",
            Self::DoubleDash => "'--'",
            Self::EndOfOptions => "end-of-options '--'",
            Self::Invalid(_) => "invalid text",
            Self::EndOfInput => "end of input",
        }
    }
}
