//! Errors raised by the I/O around the tree
//!
//! The tree itself never fails.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Cannot open input (BSD sysexits.h)
pub const EXIT_NOINPUT: i32 = 66;

/// Input/output error (BSD sysexits.h)
pub const EXIT_IOERR: i32 = 74;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read keys from {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a key source error for `path`
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Source {
            path: path.into(),
            source,
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Source { .. } => EXIT_NOINPUT,
            Error::Io(_) => EXIT_IOERR,
        }
    }
}
