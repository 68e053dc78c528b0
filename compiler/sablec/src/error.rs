//! Failures of the driver itself, as opposed to diagnostics about the input.

use std::io;

use sable_diagnostic::ParseErrorCodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// `--max-errors` was reached; later diagnostics were not reported.
    #[error("aborting after {limit} errors (raise the limit with --max-errors)")]
    DiagnosticLimit { limit: usize },

    #[error(transparent)]
    UnknownCode(#[from] ParseErrorCodeError),

    #[error("{0}")]
    Usage(String),
}

impl DriverError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &str, error: io::Error) -> Self {
        let path = path.to_string();
        match error.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Io {
                path,
                source: error,
            },
        }
    }

    pub(crate) fn usage(message: impl Into<String>) -> Self {
        DriverError::Usage(message.into())
    }
}
