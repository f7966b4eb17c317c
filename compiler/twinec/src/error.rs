//! Driver errors: everything that is not a verdict on the document.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A usage or I/O error. The binary exits with status 2 on any of these.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read `{}`: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("cannot read standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("cannot write output: {0}")]
    Write(#[source] io::Error),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value `{value}` for `{option}` (expected {expected})")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unexpected extra argument `{0}`")]
    ExtraArgument(String),
}
