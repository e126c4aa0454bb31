//! Error types for greip.

use std::fmt;
use std::io;

/// Result type alias for greip operations
pub type Result<T> = std::result::Result<T, GreipError>;

/// A range file line that could not be parsed as `a.b.c.d/n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRange {
    /// 1-based line number in the range file.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
    /// Why it was rejected.
    pub reason: String,
}

impl fmt::Display for MalformedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: '{}' ({})", self.line, self.text, self.reason)
    }
}

/// Main error type for greip
#[derive(Debug)]
pub enum GreipError {
    /// A CIDR or log file could not be opened
    Open {
        what: &'static str,
        path: String,
        source: io::Error,
    },

    /// Reading from a CIDR or log source failed part way
    Read { what: &'static str, source: io::Error },

    /// Writing an address to the output failed
    Write(io::Error),

    /// One or more range file entries are malformed
    RangeParse(Vec<MalformedRange>),

    /// An extracted token is not a valid IPv4 address
    AddressParse(String),

    /// A loaded range carries a prefix length outside 0-32
    InvalidPrefix { range: String, mask: u8 },
}

impl fmt::Display for GreipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreipError::Open { what, path, source } => {
                write!(f, "Error opening {} '{}': {}", what, path, source)
            }
            GreipError::Read { what, source } => write!(f, "Error reading {}: {}", what, source),
            GreipError::Write(source) => write!(f, "Error writing output: {}", source),
            GreipError::RangeParse(entries) => {
                write!(f, "Invalid CIDR range(s) in CIDR file:")?;
                for entry in entries {
                    write!(f, "\n  {}", entry)?;
                }
                Ok(())
            }
            GreipError::AddressParse(addr) => write!(f, "Invalid IP address: {}", addr),
            GreipError::InvalidPrefix { range, mask } => {
                write!(f, "Invalid CIDR range: {} (prefix length {})", range, mask)
            }
        }
    }
}

impl std::error::Error for GreipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GreipError::Open { source, .. } | GreipError::Read { source, .. } => Some(source),
            GreipError::Write(source) => Some(source),
            _ => None,
        }
    }
}

// Reads are wrapped explicitly with their source, so a bare io::Error is an output failure.
impl From<io::Error> for GreipError {
    fn from(err: io::Error) -> Self {
        GreipError::Write(err)
    }
}
