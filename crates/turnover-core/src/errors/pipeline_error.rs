//! Pipeline errors.

use super::{ConfigError, ErrorCode, ExportError, ParseError, SourceError};

/// Errors that can occur during a full run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Source(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
