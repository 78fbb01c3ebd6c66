//! Stable codes the `turnover` binary prints in front of a failed run.
//!
//! A missing input file, a malformed database line, an organism referenced
//! before its protein record, bad settings and a failed workbook write each
//! map to one code.

pub trait ErrorCode {
    /// One of the constants below.
    fn error_code(&self) -> &'static str;

    /// `[UNREGISTERED_ORGANISM] Organism #7# referenced ...`
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const UNREGISTERED_ORGANISM: &str = "UNREGISTERED_ORGANISM";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
