//! Errors that stop the driver itself, as opposed to lexical errors, which
//! are reported and counted.

use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status when a script contained lexical errors.
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for an unreadable script or a failed read or write.
pub const EXIT_IO_ERROR: u8 = 74;

#[derive(Debug, Error, Diagnostic)]
pub enum DriverError {
    #[error("could not read script '{}'", path.display())]
    #[diagnostic(
        code(glox::read_script),
        help("check that the file exists and is readable")
    )]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from standard input")]
    #[diagnostic(code(glox::input))]
    Input(#[source] io::Error),

    #[error("failed to write output")]
    #[diagnostic(code(glox::output))]
    Output(#[source] io::Error),
}
