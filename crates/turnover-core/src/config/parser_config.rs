//! Database parser configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParserConfig {
    /// Lines between progress log events. Default: 1_000_000.
    pub progress_interval: Option<u64>,
}

impl ParserConfig {
    pub fn effective_progress_interval(&self) -> u64 {
        self.progress_interval.unwrap_or(1_000_000)
    }
}
