//! Errors raised while resolving `turnover.toml`, `TURNOVER_*` variables and
//! command-line overrides into one run configuration.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A settings file exists but could not be read.
    #[error("Cannot read settings file {path}")]
    Unreadable { path: String },

    /// A settings file is not valid TOML for the run configuration.
    #[error("Malformed settings in {path}: {message}")]
    Malformed { path: String, message: String },

    /// A page count or progress interval outside its allowed range.
    #[error("{field} is out of range: {message}")]
    OutOfRange { field: String, message: String },

    /// A workbook file prefix or worksheet name that cannot be written.
    #[error("Unusable output name in {field}: {message}")]
    BadOutputName { field: String, message: String },

    /// The target list or database location was never given.
    #[error("No {field} given; pass it on the command line, in turnover.toml or through the environment")]
    MissingInput { field: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
