//! Shared value types.

pub mod measurement;
pub mod number;
pub mod organism;
pub mod reaction;
pub mod targets;

pub use measurement::{Measurement, ScopedFields};
pub use number::{Number, NumericRange};
pub use organism::{OrganismId, OrganismRecord};
pub use reaction::{Reaction, ReactionIndex};
pub use targets::TargetCodes;
