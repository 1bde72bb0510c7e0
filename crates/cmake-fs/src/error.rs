//! Error types for cmake-fs

use std::path::PathBuf;

/// Result type for cmake-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a host file capability can reject with
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A host-supplied capability rejected the operation.
    ///
    /// The message is embedded verbatim in diagnostic codes, so it must
    /// stand on its own as a description.
    #[error("{message}")]
    Host { message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }
}
