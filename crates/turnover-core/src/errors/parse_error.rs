//! Fatal database parse errors.
//!
//! Absent sub-fields (no pH, no temperature, ...) are not errors; they are
//! recorded as `None` on the measurement.

use super::error_code::{self, ErrorCode};

/// Conditions that abort the whole run. The reaction index is correlated in
/// a single pass and cannot be resumed mid-segment.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unparseable protein record for {code} at line {line}: {text}")]
    UnparseableIdentity {
        code: String,
        line: usize,
        text: String,
    },

    #[error("Organism #{organism_id}# referenced before its protein record in {code} at line {line}")]
    UnregisteredOrganism {
        code: String,
        organism_id: String,
        line: usize,
    },

    #[error("Turnover-number record without organism reference in {code} at line {line}: {text}")]
    MissingOrganismReference {
        code: String,
        line: usize,
        text: String,
    },

    #[error("Identity marker without a classification code at line {line}")]
    MissingCode { line: usize },

    #[error("IO error reading database at line {line}: {source}")]
    Read {
        line: usize,
        source: std::io::Error,
    },
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnregisteredOrganism { .. } => error_code::UNREGISTERED_ORGANISM,
            _ => error_code::PARSE_ERROR,
        }
    }
}
