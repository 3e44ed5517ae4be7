//! Tokens produced by the scanner.

use crate::token_kind::TokenKind;
use glox_core::text::TextSpan;
use std::fmt;

/// The decoded value of a string or number token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The text between the quotes, with no escape processing.
    String(String),
    /// A base-10 number.
    Number(f64),
}

impl Literal {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(value) => Some(*value),
            Literal::String(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(text) => f.write_str(text),
            // Integral values keep one fractional digit: `123.0`, not `123`.
            Literal::Number(value) if value.fract() == 0.0 && value.abs() < 1e16 => {
                write!(f, "{value:.1}")
            }
            Literal::Number(value) => write!(f, "{value}"),
        }
    }
}

/// A scanned token.
///
/// Tokens are immutable once created; the attributes are exposed through
/// accessors only.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    literal: Option<Literal>,
    line: u32,
    span: TextSpan,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: u32,
        span: TextSpan,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
            span,
        }
    }

    /// The end-of-input marker: empty lexeme, no literal.
    pub fn eof(line: u32, span: TextSpan) -> Self {
        Self::new(TokenKind::Eof, String::new(), None, line, span)
    }

    /// The kind of token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text this token was scanned from.
    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The decoded value, for string and number tokens.
    #[inline]
    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// 1-based line number. A string literal spanning several lines reports
    /// the line of its closing quote.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte range of the lexeme in the source.
    #[inline]
    pub fn span(&self) -> TextSpan {
        self.span
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{literal}")?,
            None => f.write_str("nil")?,
        }
        write!(f, " {}", self.line)
    }
}
