//! Parser for route patterns.
//!
//! The parser works one segment at a time. A malformed segment produces a
//! [`ParseError`], is dropped, and the parser resynchronizes at the next
//! plausible segment start, so one pass reports every problem in a pattern
//! and still yields a best-effort [`Syntax`].

use crate::diagnostic::{ParseError, ParseErrorKind};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::syntax::{LiteralSegment, OptionSegment, ParameterSegment, Segment, Syntax};
use crate::token::{Token, TokenKind};

/// Type names accepted after `:` in a parameter, compared case-insensitively.
pub const KNOWN_TYPES: &[&str] = &[
    "string",
    "int",
    "long",
    "double",
    "decimal",
    "bool",
    "datetime",
    "guid",
    "timespan",
    "uri",
    "fileinfo",
    "directoryinfo",
];

/// Returns true if `name` is a recognized type constraint.
#[must_use]
pub fn is_known_type(name: &str) -> bool {
    KNOWN_TYPES.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// Result of parsing a pattern: the best-effort tree plus every parse error.
#[derive(Clone, Debug, Default)]
pub struct ParsedPattern {
    /// Segments that parsed successfully.
    pub syntax: Syntax,
    /// Problems found, in source order of discovery.
    pub errors: Vec<ParseError>,
}

impl ParsedPattern {
    /// Returns true if no parse errors were found.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Recursive-descent parser for route patterns.
pub struct Parser {
    /// Token stream, always terminated by `EndOfInput`.
    tokens: Vec<Token>,
    /// Index of the current token.
    position: usize,
    /// Accumulated diagnostics.
    errors: Vec<ParseError>,
    /// True between a parameter's `{` and `}`.
    in_parameter: bool,
}

impl Parser {
    /// Creates a parser for the given pattern.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self {
            tokens: Lexer::tokenize(source),
            position: 0,
            errors: Vec::new(),
            in_parameter: false,
        }
    }

    /// Parses the whole pattern.
    #[must_use]
    pub fn parse(mut self) -> ParsedPattern {
        let mut segments = Vec::new();

        while !self.at_end() {
            match self.parse_segment() {
                Ok(Some(segment)) => segments.push(segment),
                Ok(None) => {}
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }
        }

        ParsedPattern {
            syntax: Syntax::new(segments),
            errors: self.errors,
        }
    }

    /// Parses one segment, dispatching on the leading token.
    ///
    /// `Ok(None)` means a stray token was consumed and reported.
    fn parse_segment(&mut self) -> Result<Option<Segment>, ParseError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::LeftBrace => Ok(Some(Segment::Parameter(self.parse_parameter()?))),
            TokenKind::DoubleDash | TokenKind::SingleDash => {
                Ok(Some(Segment::Option(self.parse_option()?)))
            }
            TokenKind::EndOfOptions => {
                self.advance();
                Ok(Some(Segment::Literal(LiteralSegment {
                    value: "--".to_string(),
                    span: token.span,
                })))
            }
            TokenKind::Identifier(value) => {
                self.advance();
                Ok(Some(Segment::Literal(LiteralSegment {
                    value,
                    span: token.span,
                })))
            }
            TokenKind::Invalid(text) => {
                self.advance();
                self.errors.push(invalid_text_error(&text, token.span));
                Ok(None)
            }
            TokenKind::RightBrace => {
                self.advance();
                self.errors.push(ParseError::new(
                    ParseErrorKind::UnbalancedBraces,
                    "'}' has no matching '{'",
                    token.span,
                ));
                Ok(None)
            }
            TokenKind::EndOfInput => Ok(None),
            other => {
                self.advance();
                self.errors.push(ParseError::new(
                    ParseErrorKind::UnexpectedToken,
                    format!("unexpected {} outside a parameter or option", other.name()),
                    token.span,
                ));
                Ok(None)
            }
        }
    }

    /// Parses `{[*]name[?][:type[?]][|description]}`.
    fn parse_parameter(&mut self) -> Result<ParameterSegment, ParseError> {
        let open = self.advance_span(); // consume '{'
        self.in_parameter = true;
        let is_catch_all = self.eat(&TokenKind::Asterisk);

        let name_token = self.current().clone();
        let name = match name_token.kind {
            TokenKind::Identifier(name) => {
                self.advance();
                name
            }
            TokenKind::RightBrace => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidParameterSyntax,
                    "parameter name is empty",
                    open.to(name_token.span),
                ));
            }
            TokenKind::EndOfInput => {
                return Err(ParseError::new(
                    ParseErrorKind::UnbalancedBraces,
                    "'{' is never closed",
                    open,
                ));
            }
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidParameterSyntax,
                    format!("expected parameter name, found {}", other.name()),
                    name_token.span,
                ));
            }
        };

        if name.starts_with(|c: char| c.is_ascii_digit()) {
            self.errors.push(ParseError::new(
                ParseErrorKind::InvalidIdentifier,
                format!("parameter name '{name}' must start with a letter or '_'"),
                name_token.span,
            ));
        }

        let mut is_optional = self.eat(&TokenKind::Question);
        let mut type_constraint = None;

        if self.eat(&TokenKind::Colon) {
            let type_token = self.current().clone();
            let TokenKind::Identifier(type_name) = type_token.kind else {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidParameterSyntax,
                    format!("expected type name after ':' in parameter '{name}'"),
                    type_token.span,
                ));
            };
            self.advance();
            if !is_known_type(&type_name) {
                self.errors.push(ParseError::new(
                    ParseErrorKind::InvalidTypeConstraint,
                    format!(
                        "unknown type '{type_name}'; expected one of: {}",
                        KNOWN_TYPES.join(", ")
                    ),
                    type_token.span,
                ));
            }
            type_constraint = Some(type_name);
            if self.eat(&TokenKind::Question) {
                is_optional = true;
            }
        }

        let description = if self.eat(&TokenKind::Pipe) {
            self.parse_description()
        } else {
            None
        };

        let close = self.current().clone();
        match close.kind {
            TokenKind::RightBrace => {
                self.advance();
                self.in_parameter = false;
            }
            TokenKind::EndOfInput | TokenKind::LeftBrace => {
                return Err(ParseError::new(
                    ParseErrorKind::UnbalancedBraces,
                    format!("parameter '{name}' is missing its closing '}}'"),
                    open.to(self.last_span()),
                )
                .with_suggestion(format!("{{{name}}}")));
            }
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidParameterSyntax,
                    format!("expected '}}' after parameter '{name}', found {}", other.name()),
                    close.span,
                ));
            }
        }
        let span = open.to(close.span);

        if is_catch_all && is_optional {
            self.errors.push(
                ParseError::new(
                    ParseErrorKind::InvalidModifierCombination,
                    format!("catch-all '{name}' cannot also be marked optional"),
                    span,
                )
                .with_suggestion(format!("{{*{name}}}")),
            );
            is_optional = false;
        }

        Ok(ParameterSegment {
            name,
            is_catch_all,
            is_optional,
            is_repeated: false,
            type_constraint,
            description,
            span,
        })
    }

    /// Parses `--name[,-s][?][|description][{param}[*]]` or `-s...`.
    fn parse_option(&mut self) -> Result<OptionSegment, ParseError> {
        let prefix = self.current().clone();
        let is_long = prefix.kind == TokenKind::DoubleDash;
        self.advance();

        let name_token = self.current().clone();
        let Some(name) = name_token.as_identifier().map(str::to_string) else {
            return Err(ParseError::new(
                ParseErrorKind::InvalidOptionFormat,
                format!("expected option name after {}", prefix.kind.name()),
                prefix.span.to(name_token.span),
            ));
        };
        self.advance();

        let mut long_form = None;
        let mut short_form = None;
        if is_long {
            long_form = Some(name);
        } else {
            if name.chars().count() > 1 {
                self.errors.push(
                    ParseError::new(
                        ParseErrorKind::InvalidOptionFormat,
                        format!("short option '-{name}' must be a single character"),
                        prefix.span.to(name_token.span),
                    )
                    .with_suggestion(format!("--{name}")),
                );
            }
            short_form = Some(name);
        }

        if self.eat(&TokenKind::Comma) {
            let alias = self.parse_short_alias(short_form.is_some())?;
            short_form = short_form.or(Some(alias));
        }

        let is_optional = self.eat(&TokenKind::Question);

        let description = if self.eat(&TokenKind::Pipe) {
            self.parse_description()
        } else {
            None
        };

        // `{*name}` after an option is a positional catch-all, not its value.
        let takes_value = self.current().kind == TokenKind::LeftBrace
            && self.peek().kind != TokenKind::Asterisk;
        let parameter = if takes_value {
            let mut parameter = self.parse_parameter()?;
            if self.eat(&TokenKind::Asterisk) {
                parameter.is_repeated = true;
            }
            Some(parameter)
        } else {
            None
        };

        Ok(OptionSegment {
            long_form,
            short_form,
            description,
            parameter,
            is_optional,
            span: prefix.span.to(self.last_span()),
        })
    }

    /// Parses the `-s` alias following `--long,`.
    fn parse_short_alias(&mut self, already_short: bool) -> Result<String, ParseError> {
        let dash = self.current().clone();
        if dash.kind != TokenKind::SingleDash {
            return Err(ParseError::new(
                ParseErrorKind::InvalidOptionFormat,
                format!("expected '-' short alias after ',', found {}", dash.kind.name()),
                dash.span,
            ));
        }
        self.advance();

        let alias_token = self.current().clone();
        let Some(alias) = alias_token.as_identifier().map(str::to_string) else {
            return Err(ParseError::new(
                ParseErrorKind::InvalidOptionFormat,
                "expected short alias name after '-'",
                dash.span.to(alias_token.span),
            ));
        };
        self.advance();

        if already_short {
            self.errors.push(ParseError::new(
                ParseErrorKind::InvalidOptionFormat,
                "a short option cannot declare another short alias",
                dash.span.to(alias_token.span),
            ));
        } else if alias.chars().count() > 1 {
            self.errors.push(ParseError::new(
                ParseErrorKind::InvalidOptionFormat,
                format!("short alias '-{alias}' must be a single character"),
                dash.span.to(alias_token.span),
            ));
        }
        Ok(alias)
    }

    /// Joins consecutive identifiers with single spaces.
    fn parse_description(&mut self) -> Option<String> {
        let mut words = Vec::new();
        while let TokenKind::Identifier(word) = &self.current().kind {
            words.push(word.clone());
            self.advance();
        }
        (!words.is_empty()).then(|| words.join(" "))
    }

    /// Skips the rest of a malformed segment.
    ///
    /// Inside a parameter this runs to just past the closing `}`; elsewhere it
    /// stops at the next token that can begin a segment, including literals.
    fn synchronize(&mut self) {
        let inside = std::mem::take(&mut self.in_parameter);
        loop {
            let token = self.current();
            if inside && token.kind == TokenKind::RightBrace {
                self.advance();
                return;
            }
            if token.starts_segment() || (!inside && token.as_identifier().is_some()) {
                return;
            }
            self.advance();
        }
    }

    /// Returns the current token.
    fn current(&self) -> &Token {
        // The stream always ends with EndOfInput and `advance` never moves past it.
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    /// Returns the token after the current one.
    fn peek(&self) -> &Token {
        &self.tokens[(self.position + 1).min(self.tokens.len() - 1)]
    }

    /// Returns true at end of input.
    fn at_end(&self) -> bool {
        self.current().kind == TokenKind::EndOfInput
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    /// Advances and returns the span of the token just consumed.
    fn advance_span(&mut self) -> Span {
        let span = self.current().span;
        self.advance();
        span
    }

    /// Consumes the current token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if &self.current().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Span of the most recently consumed token.
    fn last_span(&self) -> Span {
        self.position
            .checked_sub(1)
            .map_or(Span::default(), |i| self.tokens[i].span)
    }
}

/// Builds the diagnostic for an `Invalid` token.
fn invalid_text_error(text: &str, span: Span) -> ParseError {
    if let Some(inner) = text.strip_prefix('<') {
        let name = inner.trim_end_matches('>');
        return ParseError::new(
            ParseErrorKind::InvalidParameterSyntax,
            format!("angle-bracket parameter '{text}' is not supported"),
            span,
        )
        .with_suggestion(format!("{{{name}}}"));
    }
    if text.starts_with("---") {
        let name = text.trim_start_matches('-');
        return ParseError::new(
            ParseErrorKind::InvalidOptionFormat,
            format!("'{text}' has too many dashes"),
            span,
        )
        .with_suggestion(format!("--{name}"));
    }
    if text == "-" {
        return ParseError::new(
            ParseErrorKind::InvalidOptionFormat,
            "'-' must be followed by an option name",
            span,
        );
    }
    ParseError::new(
        ParseErrorKind::InvalidCharacter,
        format!("unrecognized text '{text}'"),
        span,
    )
}

/// Parses a pattern into a syntax tree plus parse errors.
#[must_use]
pub fn parse(pattern: &str) -> ParsedPattern {
    Parser::new(pattern).parse()
}
