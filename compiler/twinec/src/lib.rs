//! Driver for the `twine` command-line checker.
//!
//! The binary is a thin shell over this library: arguments become a
//! [`DriverConfig`], [`run`] reads and parses the document and writes the
//! verdict, and `main` maps the result to an exit status.
//!
//! | Exit status | Meaning |
//! |-------------|---------|
//! | 0 | document accepted (or `--help`) |
//! | 1 | document rejected |
//! | 2 | usage or I/O error |

mod config;
mod driver;
mod error;
mod input;
mod logging;
mod report;

pub use config::{parse_args, DriverConfig, Format, Input, USAGE};
pub use driver::{run, Verdict};
pub use error::DriverError;
pub use input::{read_console, read_file, read_input};
pub use logging::init_tracing;
pub use report::{ColorMode, Reporter};
