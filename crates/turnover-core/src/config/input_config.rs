//! Input file locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Line-delimited list of target classification codes.
    pub targets_path: Option<PathBuf>,
    /// The flat-file database.
    pub database_path: Option<PathBuf>,
}

impl InputConfig {
    pub fn require_targets_path(&self) -> Result<&Path, ConfigError> {
        self.targets_path
            .as_deref()
            .ok_or_else(|| ConfigError::MissingInput {
                field: "input.targets_path".to_string(),
            })
    }

    pub fn require_database_path(&self) -> Result<&Path, ConfigError> {
        self.database_path
            .as_deref()
            .ok_or_else(|| ConfigError::MissingInput {
                field: "input.database_path".to_string(),
            })
    }
}
