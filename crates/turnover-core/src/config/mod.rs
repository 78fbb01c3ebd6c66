//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod export_config;
pub mod input_config;
pub mod parser_config;
pub mod turnover_config;

pub use export_config::ExportConfig;
pub use input_config::InputConfig;
pub use parser_config::ParserConfig;
pub use turnover_config::{CliOverrides, TurnoverConfig};
