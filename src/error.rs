//! Error taxonomy for the huffzip engine.
//!
//! Three failure classes exist: read/write failures surfaced by the file
//! I/O collaborator, inputs the container format cannot represent, and
//! malformed containers discovered while decoding. All errors propagate to
//! the caller; nothing is retried and no partial output is ever returned.

use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum HuffError {
    /// Underlying read or write failure from the I/O collaborator.
    Io(std::io::Error),
    /// The input cannot be represented in the container format.
    Capacity(String),
    /// The container is malformed and cannot be decoded.
    Format(String),
}

impl Display for HuffError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HuffError::Io(e) => write!(f, "io error: {}", e),
            HuffError::Capacity(msg) => write!(f, "capacity error: {}", msg),
            HuffError::Format(msg) => write!(f, "format error: {}", msg),
        }
    }
}

impl std::error::Error for HuffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HuffError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HuffError {
    fn from(e: std::io::Error) -> Self {
        HuffError::Io(e)
    }
}
