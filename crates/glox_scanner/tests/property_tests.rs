//! Property-based tests for the scanner.
//!
//! These tests use proptest to generate arbitrary and Lox-shaped input and
//! verify:
//! 1. Termination: every scan ends with exactly one EOF token
//! 2. Coverage: tokens plus skipped text reconstruct the source exactly
//! 3. Line attribution: token lines never decrease and never exceed the
//!    number of lines in the source

use glox_core::LineMap;
use glox_scanner::{KeywordTable, Scanner, Token, TokenKind};
use proptest::prelude::*;

/// Characters the scanner skips without producing a token.
fn is_skippable(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\r' | '\t' | '\n'))
}

/// Generate source built from Lox fragments, including malformed ones.
fn lox_fragment_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("(".to_string()),
            Just(")".to_string()),
            Just("{".to_string()),
            Just("}".to_string()),
            Just(";".to_string()),
            Just("!=".to_string()),
            Just("==".to_string()),
            Just("<=".to_string()),
            Just(">".to_string()),
            Just("/".to_string()),
            Just(".".to_string()),
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("\"".to_string()),
            Just("@".to_string()),
            prop::string::string_regex("[a-z_][a-z0-9_]{0,8}").expect("valid regex"),
            prop::string::string_regex("[0-9]{1,4}(\\.[0-9]{0,3})?").expect("valid regex"),
            prop::string::string_regex("\"[a-z \\n]{0,8}\"").expect("valid regex"),
            prop::string::string_regex("//[a-z @\"]{0,10}").expect("valid regex"),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Generate Lox source that scans without errors: no stray characters, no
/// lone quotes, and newlines only between fragments.
fn clean_lox_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("(".to_string()),
            Just("}".to_string()),
            Just(">=".to_string()),
            Just("=".to_string()),
            Just("/".to_string()),
            Just(".".to_string()),
            Just(" ".to_string()),
            Just("\t".to_string()),
            Just("\r\n".to_string()),
            Just("\n".to_string()),
            prop::string::string_regex("[a-z_][a-z0-9_]{0,8}").expect("valid regex"),
            prop::string::string_regex("[0-9]{1,4}(\\.[0-9]{0,3})?").expect("valid regex"),
            prop::string::string_regex("\"[a-z @]{0,8}\"").expect("valid regex"),
            prop::string::string_regex("//[a-z @\"]{0,10}").expect("valid regex"),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn scan(source: &str) -> (Vec<Token>, usize) {
    let mut errors = 0;
    let tokens = Scanner::new(source).scan_tokens(|_, _| errors += 1);
    (tokens, errors)
}

proptest! {
    #[test]
    fn scan_always_ends_with_single_eof(source in any::<String>()) {
        let (tokens, _) = scan(&source);
        prop_assert!(tokens.last().is_some_and(Token::is_eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn spans_are_ordered_and_match_lexemes(source in lox_fragment_strategy()) {
        let (tokens, _) = scan(&source);
        let mut previous_end = 0;
        for token in &tokens {
            let range = token.span().to_range();
            prop_assert!(range.start >= previous_end);
            prop_assert_eq!(&source[range.clone()], token.lexeme());
            previous_end = range.end;
        }
    }

    #[test]
    fn error_free_gaps_are_whitespace_or_comments(source in clean_lox_strategy()) {
        let (tokens, errors) = scan(&source);
        prop_assert_eq!(errors, 0);
        let mut rebuilt = String::new();
        let mut cursor = 0;
        for token in &tokens {
            let range = token.span().to_range();
            let gap = &source[cursor..range.start];
            for (i, line) in gap.split('\n').enumerate() {
                if i > 0 {
                    rebuilt.push('\n');
                }
                let code = line.find("//").map_or(line, |at| &line[..at]);
                prop_assert!(is_skippable(code), "unexpected gap text {:?}", gap);
                rebuilt.push_str(line);
            }
            rebuilt.push_str(token.lexeme());
            cursor = range.end;
        }
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn lines_are_monotonic_and_bounded(source in lox_fragment_strategy()) {
        let (tokens, _) = scan(&source);
        let line_count = LineMap::new(&source).line_count() as u32;
        let mut previous = 1;
        for token in &tokens {
            prop_assert!(token.line() >= previous);
            prop_assert!(token.line() <= line_count);
            previous = token.line();
        }
        prop_assert_eq!(tokens.last().map(Token::line), Some(line_count));
    }

    #[test]
    fn single_line_tokens_start_on_their_line(source in lox_fragment_strategy()) {
        let (tokens, _) = scan(&source);
        let lines = LineMap::new(&source);
        for token in tokens.iter().filter(|t| !t.lexeme().contains('\n')) {
            prop_assert_eq!(token.line(), lines.line_of(token.span().start));
        }
    }

    #[test]
    fn identifiers_scan_as_one_token(name in "[A-Za-z_][A-Za-z0-9_]{0,20}") {
        let (tokens, errors) = scan(&name);
        prop_assert_eq!(errors, 0);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].lexeme(), name.as_str());
        let expected = KeywordTable::lox().get(&name).unwrap_or(TokenKind::Identifier);
        prop_assert_eq!(tokens[0].kind(), expected);
    }
}
