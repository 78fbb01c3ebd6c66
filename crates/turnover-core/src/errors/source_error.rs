//! Input source errors (target-code list, database file).

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors raised before any parsing begins, when an input cannot be opened.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Input file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SourceError {
    /// Classifies an open/read failure, keeping `NotFound` distinct.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl ErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::SOURCE_ERROR
    }
}
