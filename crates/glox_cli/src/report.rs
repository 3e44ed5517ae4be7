//! Diagnostic rendering for the terminal.

use glox_core::LineMap;
use glox_diagnostics::Diagnostic;
use std::io::{self, IsTerminal, Write};

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// How diagnostics are written to the error stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportStyle {
    pub color: bool,
}

impl ReportStyle {
    pub const PLAIN: ReportStyle = ReportStyle { color: false };

    /// Resolve `--pretty` / `--no-pretty`, falling back to whether stderr is
    /// a terminal.
    pub fn resolve(pretty: bool, no_pretty: bool) -> Self {
        if no_pretty {
            return ReportStyle::PLAIN;
        }
        ReportStyle {
            color: pretty || io::stderr().is_terminal(),
        }
    }
}

/// Write one diagnostic. Colored output also quotes the offending source line.
pub fn write_diagnostic<W: Write>(
    out: &mut W,
    diag: &Diagnostic,
    source: &str,
    lines: &LineMap,
    style: ReportStyle,
) -> io::Result<()> {
    if !style.color {
        return writeln!(out, "{}", diag);
    }

    write!(out, "{}[line {}]{} ", CYAN, diag.line, RESET)?;
    write!(out, "{}{}Error{} ", BOLD, RED, RESET)?;
    write!(out, "{}{}{}", GRAY, diag.code_text(), RESET)?;
    writeln!(out, ": {}", diag.message_text)?;

    if let Some(text) = lines.line_text(source, diag.line) {
        let gutter = diag.line.to_string();
        writeln!(out, "{}{} |{} {}", GRAY, gutter, RESET, text)?;
    }
    Ok(())
}

/// Write the closing error count, e.g. `Found 2 errors.`
pub fn write_summary<W: Write>(out: &mut W, count: usize, style: ReportStyle) -> io::Result<()> {
    let plural = if count == 1 { "" } else { "s" };
    if style.color {
        writeln!(out, "{}Found {} error{}.{}", RED, count, plural, RESET)
    } else {
        writeln!(out, "Found {} error{}.", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glox_diagnostics::messages;

    fn render(diag: &Diagnostic, source: &str, style: ReportStyle) -> String {
        let mut out = Vec::new();
        write_diagnostic(&mut out, diag, source, &LineMap::new(source), style).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_matches_display() {
        let diag = Diagnostic::new(&messages::UNEXPECTED_CHARACTER, 1);
        assert_eq!(
            render(&diag, "@", ReportStyle::PLAIN),
            "[line 1] Error: Unexpected character.\n"
        );
    }

    #[test]
    fn test_color_quotes_source_line() {
        let source = "var a;\nvar b = \"open";
        let diag = Diagnostic::new(&messages::UNTERMINATED_STRING, 2);
        let text = render(&diag, source, ReportStyle { color: true });
        assert!(text.contains("GLX1002"));
        assert!(text.contains("Unterminated string."));
        assert!(text.contains("var b = \"open"));
        assert!(text.contains(RED));
    }

    #[test]
    fn test_summary_pluralizes() {
        let mut out = Vec::new();
        write_summary(&mut out, 1, ReportStyle::PLAIN).unwrap();
        write_summary(&mut out, 3, ReportStyle::PLAIN).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Found 1 error.\nFound 3 errors.\n");
    }

    #[test]
    fn test_explicit_flags_win() {
        assert!(ReportStyle::resolve(true, false).color);
        assert!(!ReportStyle::resolve(false, true).color);
    }
}
