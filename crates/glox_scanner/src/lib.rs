//! glox_scanner: Lexer for Lox source code.
//!
//! Turns source text into a flat sequence of tokens:
//! - Single- and two-character punctuation and operators
//! - String literals (raw text, may span lines) and number literals
//! - Identifiers and reserved words, resolved through a `KeywordTable`
//! - `//` line comments and whitespace, which produce no tokens
//!
//! Lexical errors never stop a scan. They are handed to a callback (or
//! collected as diagnostics) and scanning resumes with the next character.

mod char_codes;
mod keywords;
mod scanner;
mod token;
mod token_kind;

pub use keywords::{KeywordError, KeywordTable};
pub use scanner::Scanner;
pub use token::{Literal, Token};
pub use token_kind::TokenKind;

/// Scan `source` with the standard keywords, reporting errors to `report`.
pub fn scan<F>(source: &str, report: F) -> Vec<Token>
where
    F: FnMut(u32, &str),
{
    Scanner::new(source).scan_tokens(report)
}
