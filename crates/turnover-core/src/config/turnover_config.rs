//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ExportConfig, InputConfig, ParserConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file looked up in the run root.
pub const PROJECT_CONFIG_FILE: &str = "turnover.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TURNOVER_*`)
/// 3. Project config (`turnover.toml` in the run root)
/// 4. User config (`~/.turnover/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TurnoverConfig {
    pub input: InputConfig,
    pub parser: ParserConfig,
    pub export: ExportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub targets_path: Option<PathBuf>,
    pub database_path: Option<PathBuf>,
    pub pages: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

impl TurnoverConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Unreadable user config is not fatal,
        // malformed TOML is.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::Malformed { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Malformed {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TurnoverConfig) -> Result<(), ConfigError> {
        if config.export.pages == Some(0) {
            return Err(ConfigError::OutOfRange {
                field: "export.pages".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.parser.progress_interval == Some(0) {
            return Err(ConfigError::OutOfRange {
                field: "parser.progress_interval".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(prefix) = &config.export.file_prefix {
            if prefix.contains(['/', '\\']) {
                return Err(ConfigError::BadOutputName {
                    field: "export.file_prefix".to_string(),
                    message: "must not contain path separators".to_string(),
                });
            }
        }
        if let Some(sheet) = &config.export.sheet_name {
            if sheet.is_empty() || sheet.chars().count() > 31 {
                return Err(ConfigError::BadOutputName {
                    field: "export.sheet_name".to_string(),
                    message: "must be 1 to 31 characters".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.turnover/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".turnover").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut TurnoverConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::Unreadable {
            path: path.display().to_string(),
        })?;

        let file_config: TurnoverConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Malformed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut TurnoverConfig, other: &TurnoverConfig) {
        if other.input.targets_path.is_some() {
            base.input.targets_path = other.input.targets_path.clone();
        }
        if other.input.database_path.is_some() {
            base.input.database_path = other.input.database_path.clone();
        }

        if other.parser.progress_interval.is_some() {
            base.parser.progress_interval = other.parser.progress_interval;
        }

        if other.export.pages.is_some() {
            base.export.pages = other.export.pages;
        }
        if other.export.output_dir.is_some() {
            base.export.output_dir = other.export.output_dir.clone();
        }
        if other.export.file_prefix.is_some() {
            base.export.file_prefix = other.export.file_prefix.clone();
        }
        if other.export.sheet_name.is_some() {
            base.export.sheet_name = other.export.sheet_name.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable numeric values are ignored.
    fn apply_env_overrides(config: &mut TurnoverConfig) {
        if let Some(val) = std::env::var_os("TURNOVER_TARGETS_PATH") {
            config.input.targets_path = Some(PathBuf::from(val));
        }
        if let Some(val) = std::env::var_os("TURNOVER_DATABASE_PATH") {
            config.input.database_path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("TURNOVER_PARSER_PROGRESS_INTERVAL") {
            if let Ok(v) = val.parse::<u64>() {
                config.parser.progress_interval = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TURNOVER_EXPORT_PAGES") {
            if let Ok(v) = val.parse::<usize>() {
                config.export.pages = Some(v);
            }
        }
        if let Some(val) = std::env::var_os("TURNOVER_EXPORT_OUTPUT_DIR") {
            config.export.output_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("TURNOVER_EXPORT_FILE_PREFIX") {
            config.export.file_prefix = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TurnoverConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.targets_path {
            config.input.targets_path = Some(v.clone());
        }
        if let Some(ref v) = cli.database_path {
            config.input.database_path = Some(v.clone());
        }
        if let Some(v) = cli.pages {
            config.export.pages = Some(v);
        }
        if let Some(ref v) = cli.output_dir {
            config.export.output_dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Malformed {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
