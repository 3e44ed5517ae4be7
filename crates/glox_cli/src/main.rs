//! glox: Scanner front end for the Lox language.
//!
//! Usage:
//!   glox [options] [SCRIPT]
//!
//! With a script, prints its tokens and exits. Without one, starts an
//! interactive prompt that scans each line as it is entered.

mod driver;
mod error;
mod report;

use clap::Parser as ClapParser;
use driver::{Driver, RunOutcome};
use error::{DriverError, EXIT_DATA_ERROR, EXIT_IO_ERROR};
use report::ReportStyle;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Once;

#[derive(ClapParser, Debug)]
#[command(name = "glox", about = "glox - a scanner for the Lox language", version)]
struct Cli {
    /// Lox script to scan. Starts an interactive prompt when omitted.
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Always color diagnostics.
    #[arg(long, conflicts_with = "no_pretty")]
    pretty: bool,

    /// Never color diagnostics.
    #[arg(long = "no-pretty")]
    no_pretty: bool,
}

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG`. Does nothing when the
/// variable is unset, so token output stays clean.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{fmt, EnvFilter};

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .try_init();
    });
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let style = ReportStyle::resolve(cli.pretty, cli.no_pretty);
    let mut driver = Driver::new(io::stdout().lock(), io::stderr().lock(), style);

    // Errors at the prompt are per line and never fail the session.
    let result = match &cli.script {
        Some(path) => driver.run_file(path),
        None => driver.run_prompt(io::stdin().lock()).map(|_| RunOutcome::default()),
    };
    drop(driver);

    let status = exit_status(&result);
    if let Err(err) = result {
        eprintln!("{:?}", miette::Report::new(err));
    }
    ExitCode::from(status)
}

fn exit_status(result: &Result<RunOutcome, DriverError>) -> u8 {
    match result {
        Ok(outcome) if outcome.had_error() => EXIT_DATA_ERROR,
        Ok(_) => 0,
        Err(_) => EXIT_IO_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_script_is_optional() {
        let cli = Cli::try_parse_from(["glox"]).unwrap();
        assert!(cli.script.is_none());

        let cli = Cli::try_parse_from(["glox", "--no-pretty", "hello.lox"]).unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("hello.lox")));
        assert!(cli.no_pretty);
    }

    #[test]
    fn test_exit_status() {
        let clean = RunOutcome { token_count: 3, error_count: 0 };
        assert_eq!(exit_status(&Ok(clean)), 0);

        let lexical = RunOutcome { token_count: 3, error_count: 2 };
        assert_eq!(exit_status(&Ok(lexical)), 65);

        let unreadable = DriverError::ReadScript {
            path: PathBuf::from("missing.lox"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(exit_status(&Err(unreadable)), 74);
    }

    #[test]
    fn test_rejects_extra_scripts() {
        assert!(Cli::try_parse_from(["glox", "a.lox", "b.lox"]).is_err());
        assert!(Cli::try_parse_from(["glox", "--pretty", "--no-pretty"]).is_err());
    }
}
