//! Character classification used by the scanner.
//!
//! The language is ASCII-only outside string literals, so every test here
//! rejects non-ASCII characters.

/// Returned by lookahead past the end of input. Matches no token rule.
pub const NULL_CHARACTER: char = '\0';

pub const LINE_FEED: u8 = b'\n';
pub const DOUBLE_QUOTE: u8 = b'"';

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_alpha_numeric(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert!(is_digit('7'));
        assert!(!is_digit('a'));
        assert!(is_alpha('_'));
        assert!(is_alpha('Z'));
        assert!(!is_alpha('1'));
        assert!(is_alpha_numeric('1'));
        assert!(!is_alpha('é'));
        assert!(!is_alpha_numeric(NULL_CHARACTER));
    }
}
