//! File and prompt modes: scan source, print tokens, report lexical errors.

use crate::error::DriverError;
use crate::report::{self, ReportStyle};
use glox_core::LineMap;
use glox_scanner::Scanner;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

pub const PROMPT: &str = "> ";

/// Result of scanning one source text (a file or a single prompt line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOutcome {
    /// Tokens printed, including the trailing EOF token.
    pub token_count: usize,
    /// Lexical errors reported.
    pub error_count: usize,
}

impl RunOutcome {
    pub fn had_error(&self) -> bool {
        self.error_count > 0
    }
}

/// Writes tokens to `out` and diagnostics to `err`.
pub struct Driver<O, E> {
    out: O,
    err: E,
    style: ReportStyle,
}

impl<O: Write, E: Write> Driver<O, E> {
    pub fn new(out: O, err: E, style: ReportStyle) -> Self {
        Self { out, err, style }
    }

    /// Scan `source` and print every token, one per line. Lexical errors are
    /// reported in the order they occur and never stop the scan.
    pub fn run_source(&mut self, source: &str) -> Result<RunOutcome, DriverError> {
        let (tokens, diagnostics) = Scanner::new(source).scan_with_diagnostics();

        if !diagnostics.is_empty() {
            let lines = LineMap::new(source);
            for diag in &diagnostics {
                report::write_diagnostic(&mut self.err, diag, source, &lines, self.style)
                    .map_err(DriverError::Output)?;
            }
        }
        for token in &tokens {
            writeln!(self.out, "{}", token).map_err(DriverError::Output)?;
        }

        let outcome = RunOutcome {
            token_count: tokens.len(),
            error_count: diagnostics.error_count(),
        };
        debug!(tokens = outcome.token_count, errors = outcome.error_count, "run finished");
        Ok(outcome)
    }

    /// Read the whole script at `path` and run it. Bytes that are not valid
    /// UTF-8 are scanned as U+FFFD.
    pub fn run_file(&mut self, path: &Path) -> Result<RunOutcome, DriverError> {
        let bytes = fs::read(path).map_err(|source| DriverError::ReadScript {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        debug!(path = %path.display(), bytes = bytes.len(), "scanning script");

        let outcome = self.run_source(&source)?;
        if outcome.had_error() {
            report::write_summary(&mut self.err, outcome.error_count, self.style)
                .map_err(DriverError::Output)?;
        }
        self.out.flush().map_err(DriverError::Output)?;
        Ok(outcome)
    }

    /// Prompt, read a line, run it, repeat until end of input. Each line is
    /// scanned on its own, so an error on one line does not carry over.
    /// Returns the totals across all lines.
    pub fn run_prompt<R: BufRead>(&mut self, mut input: R) -> Result<RunOutcome, DriverError> {
        let mut totals = RunOutcome::default();
        let mut line = Vec::new();
        loop {
            write!(self.out, "{}", PROMPT).map_err(DriverError::Output)?;
            self.out.flush().map_err(DriverError::Output)?;

            line.clear();
            let read = input.read_until(b'\n', &mut line).map_err(DriverError::Input)?;
            if read == 0 {
                debug!(errors = totals.error_count, "prompt closed");
                break;
            }

            let outcome = self.run_source(&String::from_utf8_lossy(&line))?;
            totals.token_count += outcome.token_count;
            totals.error_count += outcome.error_count;
        }
        Ok(totals)
    }

    #[cfg(test)]
    fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}
