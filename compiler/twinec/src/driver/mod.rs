//! One checker run: read, parse, report.

use std::io::{BufRead, Write};

use tracing::{debug, info_span};
use twine_markup::parse_document;

use crate::report::Reporter;
use crate::{read_input, DriverConfig, DriverError};

/// What the checker concluded about the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    /// Process exit status for this verdict.
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Accepted => 0,
            Verdict::Rejected => 1,
        }
    }
}

/// Read the configured input, parse it and write the verdict to `out`.
///
/// `stdin` is only read for [`Input::Stdin`](crate::Input::Stdin).
/// `is_tty` tells whether `out` is a terminal, for `--color=auto`.
pub fn run<R, W>(
    config: &DriverConfig,
    stdin: R,
    out: W,
    is_tty: bool,
) -> Result<Verdict, DriverError>
where
    R: BufRead,
    W: Write,
{
    let _span = info_span!("run", input = ?config.input).entered();

    let source = read_input(&config.input, stdin)?;
    let colors = config.color.should_use_colors(is_tty);
    let mut reporter = Reporter::new(out, config.format, colors);

    let verdict = match parse_document(&source) {
        Ok(root) => {
            reporter
                .accepted(&root, config.tree)
                .map_err(DriverError::Write)?;
            Verdict::Accepted
        }
        Err(error) => {
            reporter
                .rejected(&source, &error)
                .map_err(DriverError::Write)?;
            Verdict::Rejected
        }
    };
    debug!(?verdict, "run finished");
    Ok(verdict)
}
