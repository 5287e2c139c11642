//! Lexer for route patterns.
//!
//! The lexer converts a pattern such as `deploy {env} --tag,-t {tag?}` into a
//! stream of tokens. It never fails: text it does not understand becomes an
//! [`TokenKind::Invalid`] token so the parser can report it with a position.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for route patterns.
pub struct Lexer<'src> {
    /// Pattern being tokenized.
    source: &'src str,
    /// Remaining pattern text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given pattern.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
        }
    }

    /// Returns the next token from the pattern.
    ///
    /// Once the input is exhausted every call returns [`TokenKind::EndOfInput`].
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::EndOfInput, Span::at(start));
        };

        let kind = match c {
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            ':' => self.single(TokenKind::Colon),
            '?' => self.single(TokenKind::Question),
            '*' => self.single(TokenKind::Asterisk),
            '|' => self.single(TokenKind::Pipe),
            ',' => self.single(TokenKind::Comma),
            '-' => self.scan_dashes(start),
            '<' => self.scan_angle_bracket(),
            c if is_identifier_start(c) => self.scan_identifier(),
            _ => self.scan_invalid(),
        };

        Token::new(kind, Span::new(start, self.position))
    }

    /// Tokenizes a whole pattern.
    ///
    /// The returned vector always ends with exactly one `EndOfInput` token.
    #[must_use]
    pub fn tokenize(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_end = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if is_end {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
        }
    }

    /// Consumes one character and yields `kind`.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans a run of dashes: option prefixes, the `--` separator, or junk.
    fn scan_dashes(&mut self, start: usize) -> TokenKind {
        let run = self.rest.chars().take_while(|&c| c == '-').count();

        if run >= 3 {
            // `---verbose` is a typo we want to show whole.
            for _ in 0..run {
                self.advance();
            }
            self.consume_identifier_chars();
            return TokenKind::Invalid(self.source[start..self.position].to_string());
        }

        let after = self.peek_char_n(run);
        let names_option = after.is_some_and(is_identifier_start);

        if run == 2 {
            self.advance();
            self.advance();
            let bounded_after = after.is_none_or(char::is_whitespace);
            if bounded_after && self.preceded_by_boundary(start) {
                return TokenKind::EndOfOptions;
            }
            return TokenKind::DoubleDash;
        }

        self.advance();
        if names_option {
            TokenKind::SingleDash
        } else {
            TokenKind::Invalid("-".to_string())
        }
    }

    /// True when the byte before `offset` is whitespace or the start of input.
    fn preceded_by_boundary(&self, offset: usize) -> bool {
        self.source[..offset]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace)
    }

    /// Scans legacy `<name>` syntax as a single invalid token.
    fn scan_angle_bracket(&mut self) -> TokenKind {
        let start = self.position;
        self.advance(); // consume '<'
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                break;
            }
            self.advance();
            if c == '>' {
                break;
            }
        }
        TokenKind::Invalid(self.source[start..self.position].to_string())
    }

    /// Scans an identifier run.
    fn scan_identifier(&mut self) -> TokenKind {
        let start = self.position;
        self.consume_identifier_chars();
        TokenKind::Identifier(self.source[start..self.position].to_string())
    }

    /// Consumes identifier characters, allowing inner `-` and `.` joiners.
    fn consume_identifier_chars(&mut self) {
        while let Some(c) = self.peek_char() {
            if is_identifier_start(c) {
                self.advance();
            } else if is_joiner(c) && self.peek_char_n(1).is_some_and(is_identifier_start) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scans a run of characters that start no other token.
    fn scan_invalid(&mut self) -> TokenKind {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || is_identifier_start(c) || is_punctuation(c) {
                break;
            }
            self.advance();
        }
        TokenKind::Invalid(self.source[start..self.position].to_string())
    }
}

/// Returns true if `c` can start (and continue) an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters allowed inside an identifier when followed by another identifier character.
fn is_joiner(c: char) -> bool {
    matches!(c, '-' | '.')
}

/// Characters with their own token kinds.
fn is_punctuation(c: char) -> bool {
    matches!(c, '{' | '}' | ':' | '?' | '*' | '|' | ',' | '-' | '<')
}
