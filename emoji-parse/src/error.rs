use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Represents any kind of error that can occur while parsing emoji data.
#[derive(Debug)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) line: Option<u64>,
    pub(crate) path: Option<PathBuf>,
}

/// The kind of error that occurred while parsing emoji data.
#[derive(Debug)]
pub enum ErrorKind {
    /// An I/O error.
    Io(io::Error),
    /// A generic parse error.
    Parse(String),
}

impl Error {
    /// Create a new parse error from the given message.
    pub(crate) fn parse(msg: String) -> Error {
        Error { kind: ErrorKind::Parse(msg), line: None, path: None }
    }

    /// Create a new I/O error that occurred while reading the given file.
    pub(crate) fn io(err: io::Error, path: Option<&Path>) -> Error {
        Error {
            kind: ErrorKind::Io(err),
            line: None,
            path: path.map(Path::to_path_buf),
        }
    }

    /// Attach the location of the offending line to this error.
    pub(crate) fn at(mut self, path: Option<&Path>, line: u64) -> Error {
        self.line = Some(line);
        self.path = path.map(Path::to_path_buf);
        self
    }

    /// Return the specific kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the line number at which this error occurred, if available.
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// Returns true if and only if reading a data file failed, as opposed
    /// to a line in it being malformed.
    pub fn is_io_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            ErrorKind::Io(ref err) => Some(err),
            ErrorKind::Parse(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.path.as_deref(), self.line) {
            (Some(path), Some(line)) => {
                write!(f, "{}:{}: ", path.display(), line)?
            }
            (Some(path), None) => write!(f, "{}: ", path.display())?,
            (None, Some(line)) => write!(f, "error on line {}: ", line)?,
            (None, None) => {}
        }
        match self.kind {
            ErrorKind::Io(ref err) => err.fmt(f),
            ErrorKind::Parse(ref msg) => f.write_str(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;

    use super::{Error, ErrorKind};

    #[test]
    fn display_with_location() {
        let err = Error::parse("bad codepoint".to_string())
            .at(Some(Path::new("emoji-sequences.txt")), 12);
        assert_eq!(err.to_string(), "emoji-sequences.txt:12: bad codepoint");

        let err = Error::parse("bad codepoint".to_string()).at(None, 3);
        assert_eq!(err.to_string(), "error on line 3: bad codepoint");
    }

    #[test]
    fn parse_error_kind() {
        let err = Error::parse("no fields".to_string()).at(None, 7);
        assert!(!err.is_io_error());
        assert_eq!(err.line(), Some(7));
        match *err.kind() {
            ErrorKind::Parse(ref msg) => assert_eq!(msg, "no fields"),
            ref kind => panic!("unexpected error kind: {:?}", kind),
        }
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn io_error() {
        let inner = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err = Error::io(inner, Some(Path::new("data")));
        assert!(err.is_io_error());
        assert_eq!(err.to_string(), "data: missing");
    }
}
