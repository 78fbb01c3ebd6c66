//! turnover-parser: single-pass parser for the enzyme flat-file database.
//!
//! Raw lines are folded into tagged logical records by the [`Reassembler`],
//! partitioned into per-code segments by the [`Segmenter`], and protein and
//! turnover-number records are turned into organism records and
//! measurements by the [`extract`] functions.

pub mod extract;
pub mod record;
pub mod segmenter;

pub use record::{FieldKind, LogicalRecord, Reassembler};
pub use segmenter::{parse_file, parse_reader, ParseOutcome, ParseStats, Segmenter};
