#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use toml_config::TomlConfig;

/// Reads `path` when given, otherwise falls back to the built-in defaults.
pub fn load_config(path: Option<&str>) -> Result<TomlConfig> {
    match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            TomlConfig::from_file(path)
        }
        None => Ok(TomlConfig::default()),
    }
}
