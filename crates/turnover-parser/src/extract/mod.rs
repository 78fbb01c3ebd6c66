//! Kinetic field extraction from protein and turnover-number record text.
//!
//! Every function here is pure: text in, values out. Absent sub-fields come
//! back as `None`; the segmenter decides which missing pieces are fatal.

mod fields;
mod identity;
mod scope;
mod turnover;

pub use fields::{extract_ph, extract_scoped, extract_temperature, is_mutant, is_wild_type};
pub use identity::{parse_identity, OrganismIdentity};
pub use scope::ClauseScope;
pub use turnover::{extract_substrate, parse_turnover, TurnoverRecord, CLAUSE_SEPARATOR};
