//! `twine`: check a markup document from a file or the console.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use twinec::{init_tracing, parse_args, run, USAGE};

/// Exit status for usage and I/O errors.
const DRIVER_ERROR: u8 = 2;

fn main() -> ExitCode {
    init_tracing();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!();
            eprint!("{USAGE}");
            return ExitCode::from(DRIVER_ERROR);
        }
    };

    if config.help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    match run(&config, io::stdin().lock(), stdout.lock(), is_tty) {
        Ok(verdict) => ExitCode::from(verdict.exit_code()),
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(DRIVER_ERROR)
        }
    }
}
