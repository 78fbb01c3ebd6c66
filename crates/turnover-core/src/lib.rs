//! turnover-core: shared foundation for the turnover-number extractor.
//!
//! - Types: numeric ranges, measurements, organism records, the reaction index
//!   and the ordered set of target codes
//! - Errors: one `thiserror` enum per subsystem plus the pipeline aggregate
//! - Config: layered TOML configuration
//! - Tracing: `EnvFilter`-driven subscriber setup

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::TurnoverConfig;
pub use errors::{
    ConfigError, ErrorCode, ExportError, ParseError, PipelineError, SourceError,
};
pub use types::{
    Measurement, Number, NumericRange, OrganismId, OrganismRecord, Reaction, ReactionIndex,
    ScopedFields, TargetCodes,
};
