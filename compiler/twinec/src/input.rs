//! Document acquisition.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use tracing::debug;

use crate::{DriverError, Input};

/// Read console lines until the first empty line or end of stream.
///
/// Each line is kept with a trailing `\n`, whatever terminator it was read
/// with. The empty line that ends the document is not part of it.
pub fn read_console<R: BufRead>(reader: R) -> io::Result<String> {
    let mut document = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            break;
        }
        document.push_str(&line);
        document.push('\n');
    }
    Ok(document)
}

/// Read a whole file as the document.
pub fn read_file(path: &Path) -> Result<String, DriverError> {
    fs::read_to_string(path).map_err(|source| DriverError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the document selected by `input`; `stdin` is only touched for
/// [`Input::Stdin`].
pub fn read_input<R: BufRead>(input: &Input, stdin: R) -> Result<String, DriverError> {
    let document = match input {
        Input::Stdin => read_console(stdin).map_err(DriverError::Stdin)?,
        Input::File(path) => read_file(path)?,
    };
    debug!(bytes = document.len(), "document read");
    Ok(document)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use std::io::{Cursor, Write};
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn console_stops_at_first_empty_line() {
        let stdin = Cursor::new("<a>\ntext</a>\n\nignored\n");
        assert_eq!(read_console(stdin).unwrap(), "<a>\ntext</a>\n");
    }

    #[test]
    fn console_reads_to_end_without_empty_line() {
        let stdin = Cursor::new("one\r\ntwo");
        assert_eq!(read_console(stdin).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn console_empty_stream() {
        assert_eq!(read_console(Cursor::new("")).unwrap(), "");
        assert_eq!(read_console(Cursor::new("\nlater")).unwrap(), "");
    }

    #[test]
    fn file_is_read_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<a>\n\n</a>").unwrap();
        let input = Input::File(file.path().to_path_buf());
        let document = read_input(&input, Cursor::new("unused")).unwrap();
        assert_eq!(document, "<a>\n\n</a>");
    }

    #[test]
    fn missing_file_reports_path() {
        let input = Input::File(PathBuf::from("/nonexistent/doc.twine"));
        let error = read_input(&input, Cursor::new("")).unwrap_err();
        assert!(matches!(error, DriverError::ReadFile { .. }));
        assert!(error
            .to_string()
            .starts_with("cannot read `/nonexistent/doc.twine`: "));
    }

    #[test]
    fn stdin_input_uses_console_rules() {
        let document = read_input(&Input::Stdin, Cursor::new("x\n\ny\n")).unwrap();
        assert_eq!(document, "x\n");
    }
}
