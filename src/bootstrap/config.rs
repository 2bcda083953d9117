//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read TOML configuration files
//! - Parse TOML into the AppConfig DTO
//! - Report I/O and parsing errors with context
//!
//! **Pure data loading only. Accept whatever is in the file.**

use std::path::{Path, PathBuf};

use anyhow::Context;
use bc_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// **NO validation is performed**: empty strings and a zero cooldown are
/// valid facts; missing sections result in empty values.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Load `config_path` when it exists, otherwise use the system defaults
/// rooted at `data_dir`.
pub fn resolve_config(config_path: &Path, data_dir: &Path) -> anyhow::Result<AppConfig> {
    if config_path.exists() {
        load_config(config_path.to_path_buf())
    } else {
        ::tracing::debug!(path = %config_path.display(), "no config file, using system defaults");
        Ok(AppConfig::with_system_defaults(data_dir.to_path_buf()))
    }
}
