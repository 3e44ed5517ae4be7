//! Reserved-word lookup for identifier-shaped lexemes.

use crate::char_codes::{is_alpha, is_alpha_numeric};
use crate::token_kind::TokenKind;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors building a custom keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordError {
    #[error("'{0}' is not a keyword token kind")]
    NotAKeyword(TokenKind),
    #[error("'{0}' can never be scanned as an identifier")]
    InvalidSpelling(String),
}

/// Maps reserved spellings to their token kinds.
///
/// Lookup is exact and case-sensitive. A table is read-only once handed to a
/// scanner.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    map: FxHashMap<Box<str>, TokenKind>,
}

impl KeywordTable {
    /// An empty table: every identifier-shaped lexeme scans as `Identifier`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard Lox keywords, built on first use.
    pub fn lox() -> &'static KeywordTable {
        static LOX: OnceLock<KeywordTable> = OnceLock::new();
        LOX.get_or_init(|| {
            let mut table = KeywordTable::new();
            for kind in TokenKind::KEYWORDS {
                if let Some(text) = kind.keyword_text() {
                    table.map.insert(text.into(), kind);
                }
            }
            table
        })
    }

    /// Build a table from `(spelling, kind)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = (&'a str, TokenKind)>,
    {
        let mut table = KeywordTable::new();
        for (spelling, kind) in pairs {
            table.insert(spelling, kind)?;
        }
        Ok(table)
    }

    /// Register a spelling, returning the kind it previously mapped to.
    pub fn insert(
        &mut self,
        spelling: &str,
        kind: TokenKind,
    ) -> Result<Option<TokenKind>, KeywordError> {
        if !kind.is_keyword() {
            return Err(KeywordError::NotAKeyword(kind));
        }
        if !is_identifier_shaped(spelling) {
            return Err(KeywordError::InvalidSpelling(spelling.to_string()));
        }
        Ok(self.map.insert(spelling.into(), kind))
    }

    /// Look up a lexeme.
    #[inline]
    pub fn get(&self, text: &str) -> Option<TokenKind> {
        self.map.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn is_identifier_shaped(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(is_alpha) && chars.all(is_alpha_numeric)
}
