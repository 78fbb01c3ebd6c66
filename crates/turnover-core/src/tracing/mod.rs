//! Run logging.
//! One stderr subscriber, filtered per crate through `TURNOVER_LOG`.

pub mod setup;

pub use setup::init_tracing;
