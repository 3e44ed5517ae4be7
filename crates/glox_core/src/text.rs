//! Text span and line types for source location tracking.
//!
//! Tokens carry a `TextSpan` for the exact bytes they were scanned from, and
//! diagnostics carry a 1-based line number that `LineMap` resolves back to
//! the text of that line.

use std::fmt;
use std::ops::Range;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = u32;

/// A span in source text, defined by a start position and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TextSpan {
    /// The byte offset where this span starts.
    pub start: TextPos,
    /// The length of this span in bytes.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// Create a span from `usize` byte offsets, as produced by slicing a `&str`.
    ///
    /// Offsets past `u32::MAX` are clamped; sources that large are not
    /// supported by the toolchain.
    #[inline]
    pub fn from_offsets(start: usize, end: usize) -> Self {
        let start = TextPos::try_from(start).unwrap_or(TextPos::MAX);
        let end = TextPos::try_from(end).unwrap_or(TextPos::MAX);
        Self::from_bounds(start, end.max(start))
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    /// Whether this span is empty (zero-length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Convert to a byte range.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// A map from line numbers to byte offsets, built from source text.
///
/// Lines are 1-based, the same numbering the scanner attaches to tokens and
/// diagnostics. Only `\n` starts a new line; a `\r` before it stays part of
/// the preceding line's text.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offsets of the start of each line.
    line_starts: Vec<TextPos>,
    /// Total length of the source in bytes.
    len: TextPos,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextPos::try_from(i + 1).unwrap_or(TextPos::MAX));
            }
        }
        Self {
            line_starts,
            len: TextPos::try_from(text.len()).unwrap_or(TextPos::MAX),
        }
    }

    /// Get the 1-based line number for a byte offset.
    pub fn line_of(&self, pos: TextPos) -> u32 {
        let index = match self.line_starts.binary_search(&pos) {
            Ok(index) => index,
            Err(index) => index - 1,
        };
        index as u32 + 1
    }

    /// Get the byte range of a 1-based line, excluding its trailing newline.
    pub fn line_span(&self, line: u32) -> Option<TextSpan> {
        let index = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = match self.line_starts.get(index + 1) {
            Some(&next) => next - 1,
            None => self.len,
        };
        Some(TextSpan::from_bounds(start, end))
    }

    /// Get the text of a 1-based line, without its line terminator.
    pub fn line_text<'a>(&self, text: &'a str, line: u32) -> Option<&'a str> {
        let span = self.line_span(line)?;
        let slice = text.get(span.to_range())?;
        Some(slice.strip_suffix('\r').unwrap_or(slice))
    }

    /// Get the total number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
