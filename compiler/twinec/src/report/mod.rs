//! Verdict rendering.
//!
//! Text output keeps the console checker's wording: `OK`, or
//! `Failed on (line, column): reason` followed by a snippet of the
//! offending line with a caret under the failure column. JSON output is a
//! single object per run, for tools.

use std::fmt::Write as _;
use std::io::{self, Write};

use twine_markup::{ParseError, ScriptNode};

use crate::Format;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const OK: &str = "\x1b[1;32m"; // Bold green
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether the output is a terminal.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes verdicts to `W` in the configured format.
pub struct Reporter<W: Write> {
    writer: W,
    format: Format,
    colors: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W, format: Format, colors: bool) -> Self {
        Reporter {
            writer,
            format,
            colors,
        }
    }

    /// Report an accepted document, with its tree when `tree` is set.
    pub fn accepted(&mut self, root: &ScriptNode, tree: bool) -> io::Result<()> {
        match self.format {
            Format::Text => {
                self.write_colored("OK", colors::OK)?;
                writeln!(self.writer)?;
                if tree {
                    self.writer.write_all(root.dump().as_bytes())?;
                }
            }
            Format::Json => {
                if tree {
                    writeln!(
                        self.writer,
                        "{{\"ok\":true,\"tree\":\"{}\"}}",
                        escape_json(&root.dump())
                    )?;
                } else {
                    writeln!(self.writer, "{{\"ok\":true}}")?;
                }
            }
        }
        self.writer.flush()
    }

    /// Report a rejected document. `source` is the text that was parsed.
    pub fn rejected(&mut self, source: &str, error: &ParseError) -> io::Result<()> {
        match self.format {
            Format::Text => {
                self.write_colored("Failed", colors::ERROR)?;
                writeln!(
                    self.writer,
                    " on ({}, {}): {}",
                    error.line(),
                    error.column(),
                    error.reason()
                )?;
                self.write_snippet(source, error)?;
            }
            Format::Json => {
                writeln!(
                    self.writer,
                    "{{\"ok\":false,\"line\":{},\"column\":{},\"offset\":{},\"reason\":\"{}\"}}",
                    error.line(),
                    error.column(),
                    error.offset(),
                    escape_json(&error.reason().to_string())
                )?;
            }
        }
        self.writer.flush()
    }

    /// The failing line with a caret under the failure column.
    ///
    /// ```text
    ///   3 | <b>
    ///     | ^
    /// ```
    fn write_snippet(&mut self, source: &str, error: &ParseError) -> io::Result<()> {
        let line_text = source.lines().nth(error.line()).unwrap_or("");
        let number = (error.line() + 1).to_string();
        let blank = " ".repeat(number.len());

        // Keep tabs so the caret lines up with the rendered line.
        let pad: String = line_text
            .chars()
            .take(error.column())
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        self.write_colored(&format!("  {number} |"), colors::GUTTER)?;
        writeln!(self.writer, " {line_text}")?;
        self.write_colored(&format!("  {blank} |"), colors::GUTTER)?;
        write!(self.writer, " {pad}")?;
        self.write_colored("^", colors::ERROR)?;
        writeln!(self.writer)
    }

    fn write_colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        if self.colors {
            write!(self.writer, "{color}{text}{}", colors::RESET)
        } else {
            write!(self.writer, "{text}")
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Escape a string for a JSON string literal.
fn escape_json(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\u{:04x}", u32::from(c));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
