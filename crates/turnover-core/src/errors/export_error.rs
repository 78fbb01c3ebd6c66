//! Table export errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Page count must be at least 1, got {pages}")]
    InvalidPageCount { pages: usize },

    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Spreadsheet error writing {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },
}

impl ErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
