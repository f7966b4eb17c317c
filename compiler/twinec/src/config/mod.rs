//! Command-line configuration.
//!
//! Arguments are parsed by hand; the surface is small enough that a flag
//! table is clearer than a parser dependency.

use std::path::PathBuf;

use crate::report::ColorMode;
use crate::DriverError;

/// Usage text printed by `--help` and after argument errors.
pub const USAGE: &str = "\
Usage: twine [OPTIONS] [FILE]

Check a markup document. Without FILE (or with `-`), lines are read from
standard input until the first empty line.

Options:
  --color=<when>     Colorize output: auto, always, never (default: auto)
  --format=<format>  Output format: text, json (default: text)
  --tree             Print the parsed tree of an accepted document
  -h, --help         Print this help
";

/// Where the document comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    /// Console lines up to the first empty line.
    #[default]
    Stdin,
    /// A whole file.
    File(PathBuf),
}

/// How verdicts are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `OK` or `Failed on (line, column): reason`, plus a source snippet.
    #[default]
    Text,
    /// One JSON object per run.
    Json,
}

/// Everything the driver needs to know about one invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverConfig {
    pub input: Input,
    pub color: ColorMode,
    pub format: Format,
    /// Print the parsed tree on success.
    pub tree: bool,
    /// Print usage and exit.
    pub help: bool,
}

/// Parse command-line arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<DriverConfig, DriverError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = DriverConfig::default();
    let mut input: Option<Input> = None;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            config.help = true;
        } else if arg == "--tree" {
            config.tree = true;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            config.color = parse_color(value)?;
        } else if let Some(value) = arg.strip_prefix("--format=") {
            config.format = parse_format(value)?;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(DriverError::UnknownOption(arg));
        } else if input.is_some() {
            return Err(DriverError::ExtraArgument(arg));
        } else if arg == "-" {
            input = Some(Input::Stdin);
        } else {
            input = Some(Input::File(PathBuf::from(arg)));
        }
    }

    config.input = input.unwrap_or_default();
    Ok(config)
}

fn parse_color(value: &str) -> Result<ColorMode, DriverError> {
    match value {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err(DriverError::InvalidValue {
            option: "--color",
            value: value.to_string(),
            expected: "auto, always or never",
        }),
    }
}

fn parse_format(value: &str) -> Result<Format, DriverError> {
    match value {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        _ => Err(DriverError::InvalidValue {
            option: "--format",
            value: value.to_string(),
            expected: "text or json",
        }),
    }
}
