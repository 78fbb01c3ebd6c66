//! Table export configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Number of spreadsheet artifacts to split the target codes across. Default: 1.
    pub pages: Option<usize>,
    /// Directory receiving the artifacts. Default: `output`.
    pub output_dir: Option<PathBuf>,
    /// Artifact file name prefix, followed by the 1-based page number. Default: `EC_numbers`.
    pub file_prefix: Option<String>,
    /// Worksheet name. Default: `Enzymes`.
    pub sheet_name: Option<String>,
}

impl ExportConfig {
    pub fn effective_pages(&self) -> usize {
        self.pages.unwrap_or(1)
    }

    pub fn effective_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("output"))
    }

    pub fn effective_file_prefix(&self) -> &str {
        self.file_prefix.as_deref().unwrap_or("EC_numbers")
    }

    pub fn effective_sheet_name(&self) -> &str {
        self.sheet_name.as_deref().unwrap_or("Enzymes")
    }
}
