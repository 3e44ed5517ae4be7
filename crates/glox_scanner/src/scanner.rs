//! The Lox scanner.
//!
//! A single pass over the source that turns characters into tokens. Lexical
//! errors are reported and skipped; a scan always produces a complete token
//! sequence ending in `Eof`.

use crate::char_codes::*;
use crate::keywords::KeywordTable;
use crate::token::{Literal, Token};
use crate::token_kind::TokenKind;
use glox_core::text::TextSpan;
use glox_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};

/// Receives each lexical error as it is found.
type Reporter<'r> = dyn FnMut(u32, &DiagnosticMessage) + 'r;

/// Converts Lox source text into tokens.
///
/// A scanner is used for exactly one scan: `scan_tokens` consumes it.
pub struct Scanner<'a> {
    /// The source text being scanned.
    source: &'a str,
    /// Reserved words recognized by this scan.
    keywords: &'a KeywordTable,
    /// Tokens emitted so far.
    tokens: Vec<Token>,
    /// Byte offset of the first character of the current lexeme.
    start: usize,
    /// Byte offset of the next unread character.
    current: usize,
    /// Current 1-based line.
    line: u32,
    /// Number of errors reported so far.
    error_count: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner that recognizes the standard Lox keywords.
    pub fn new(source: &'a str) -> Self {
        Self::with_keywords(source, KeywordTable::lox())
    }

    /// Create a scanner with a caller-supplied keyword table.
    pub fn with_keywords(source: &'a str, keywords: &'a KeywordTable) -> Self {
        Self {
            source,
            keywords,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            error_count: 0,
        }
    }

    /// Scan the whole source, calling `report(line, message)` for each
    /// lexical error. The returned tokens always end with `Eof`.
    pub fn scan_tokens<F>(self, mut report: F) -> Vec<Token>
    where
        F: FnMut(u32, &str),
    {
        self.run(&mut |line: u32, message: &DiagnosticMessage| report(line, message.message))
    }

    /// Scan the whole source, collecting lexical errors as diagnostics.
    pub fn scan_with_diagnostics(self) -> (Vec<Token>, DiagnosticCollection) {
        let mut diagnostics = DiagnosticCollection::new();
        let tokens = self.run(&mut |line: u32, message: &DiagnosticMessage| {
            diagnostics.add(Diagnostic::new(message, line))
        });
        (tokens, diagnostics)
    }

    fn run(mut self, report: &mut Reporter<'_>) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(report);
        }

        let end = TextSpan::from_offsets(self.source.len(), self.source.len());
        self.tokens.push(Token::eof(self.line, end));

        tracing::trace!(
            bytes = self.source.len(),
            tokens = self.tokens.len(),
            errors = self.error_count,
            lines = self.line,
            "scan complete"
        );
        self.tokens
    }

    // ========================================================================
    // Cursor primitives
    // ========================================================================

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consume the next character. Multi-byte characters are consumed whole.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let ch = self.source[self.current..].chars().next()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    /// The byte at `current + offset` as a character, or `NULL_CHARACTER`
    /// past the end. Non-ASCII bytes never match an ASCII class.
    #[inline]
    fn char_at(&self, offset: usize) -> char {
        self.source
            .as_bytes()
            .get(self.current + offset)
            .map_or(NULL_CHARACTER, |&b| b as char)
    }

    #[inline]
    fn peek(&self) -> char {
        self.char_at(0)
    }

    #[inline]
    fn peek_next(&self) -> char {
        self.char_at(1)
    }

    /// Consume the next character only if it is `expected`.
    #[inline]
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn error(&mut self, report: &mut Reporter<'_>, message: &DiagnosticMessage) {
        self.error_count += 1;
        tracing::debug!(line = self.line, code = message.code, "{}", message.message);
        report(self.line, message);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_with(kind, None);
    }

    /// Emit the lexeme `start..current` with the line as it stands now.
    fn add_token_with(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = &self.source[self.start..self.current];
        let span = TextSpan::from_offsets(self.start, self.current);
        self.tokens.push(Token::new(kind, lexeme, literal, self.line, span));
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    fn scan_token(&mut self, report: &mut Reporter<'_>) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => self.scan_compound(TokenKind::Bang, TokenKind::BangEqual),
            '=' => self.scan_compound(TokenKind::Equal, TokenKind::EqualEqual),
            '<' => self.scan_compound(TokenKind::Less, TokenKind::LessEqual),
            '>' => self.scan_compound(TokenKind::Greater, TokenKind::GreaterEqual),

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.scan_string(report),

            c if is_digit(c) => self.scan_number(),
            c if is_alpha(c) => self.scan_identifier(),

            _ => self.error(report, &messages::UNEXPECTED_CHARACTER),
        }
    }

    /// `single`, or `compound` when the next character is `=`.
    fn scan_compound(&mut self, single: TokenKind, compound: TokenKind) {
        let kind = if self.match_char('=') { compound } else { single };
        self.add_token(kind);
    }

    /// Skip to the end of the line. The newline itself is left for the main
    /// loop so it is counted.
    fn skip_line_comment(&mut self) {
        let rest = &self.source.as_bytes()[self.current..];
        self.current = match memchr::memchr(LINE_FEED, rest) {
            Some(offset) => self.current + offset,
            None => self.source.len(),
        };
    }

    fn scan_string(&mut self, report: &mut Reporter<'_>) {
        let rest = &self.source.as_bytes()[self.current..];
        match memchr::memchr(DOUBLE_QUOTE, rest) {
            Some(offset) => {
                self.line += count_line_feeds(&rest[..offset]);
                // Past the closing quote.
                self.current += offset + 1;
                let value = self.source[self.start + 1..self.current - 1].to_string();
                self.add_token_with(TokenKind::String, Some(Literal::String(value)));
            }
            None => {
                self.line += count_line_feeds(rest);
                self.current = self.source.len();
                self.error(report, &messages::UNTERMINATED_STRING);
            }
        }
    }

    fn scan_number(&mut self) {
        self.skip_digits();

        // A '.' is part of the number only when a digit follows it.
        if self.peek() == '.' && is_digit(self.peek_next()) {
            self.current += 1;
            self.skip_digits();
        }

        let text = &self.source[self.start..self.current];
        // Digit runs with at most one interior '.' always parse.
        let value = text.parse::<f64>().unwrap_or_default();
        self.add_token_with(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn skip_digits(&mut self) {
        while is_digit(self.peek()) {
            self.current += 1;
        }
    }

    fn scan_identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.current += 1;
        }

        let text = &self.source[self.start..self.current];
        let kind = self.keywords.get(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}

fn count_line_feeds(bytes: &[u8]) -> u32 {
    let count = memchr::memchr_iter(LINE_FEED, bytes).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
