use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No value for a key while failing on missing values
    MissingVar {
        key: String,
        /// Output assembled before the scan was aborted
        partial: String,
    },
    /// Malformed `KEY=VALUE` argument
    InvalidPair(String),
    /// IO Error
    IoError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingVar { key, .. } => write!(f, "Undefined variable '{}'", key),
            Error::InvalidPair(msg) => write!(f, "Invalid key-value pair: {}", msg),
            Error::IoError(msg) => write!(f, "IO Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

/// Diagnostic emitted once per key that had no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Warning<'k> {
    pub key: &'k str,
}

impl<'k> Warning<'k> {
    pub fn missing(key: &'k str) -> Self {
        Self { key }
    }
}

impl fmt::Display for Warning<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WARNING: No value (environment variable) supplied for key \"{}\"",
            self.key
        )
    }
}
