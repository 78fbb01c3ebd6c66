//! Tagged logical records and the line reassembler.

mod kind;
mod reassembler;

pub use kind::FieldKind;
pub use reassembler::{LogicalRecord, Reassembler, ENTRY_TERMINATOR};
