//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! **No business logic, no validation.** Missing values are kept as read
//! (empty path, empty slot, zero cooldown); production defaults come only from
//! [`AppConfig::with_system_defaults`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::history::HISTORY_SLOT;
use crate::session::DEFAULT_COOLDOWN_MS;

/// When the history snapshot is written to the key-value store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointPolicy {
    /// Save after every successful mutation.
    #[default]
    EveryMutation,
    /// Save only when the host asks for a checkpoint (suspend, shutdown).
    OnSuspend,
}

impl CheckpointPolicy {
    /// Map a config string. Unknown strings fall back to `EveryMutation`.
    pub fn from_config_str(value: &str) -> Self {
        match value {
            "on_suspend" => CheckpointPolicy::OnSuspend,
            _ => CheckpointPolicy::EveryMutation,
        }
    }

    pub fn saves_on_mutation(&self) -> bool {
        matches!(self, CheckpointPolicy::EveryMutation)
    }
}

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Key-value store file path (path info only, no existence check)
    pub store_path: PathBuf,

    /// Slot holding the history snapshot (may be empty - this is a fact, not an error)
    pub history_slot: String,

    pub checkpoint: CheckpointPolicy,

    /// Scanner cooldown after a successful scan, in milliseconds
    pub cooldown_ms: u64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            store_path: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("store_path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            history_slot: toml_value
                .get("storage")
                .and_then(|s| s.get("history_slot"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            checkpoint: CheckpointPolicy::from_config_str(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("checkpoint"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            cooldown_ms: toml_value
                .get("scanner")
                .and_then(|s| s.get("cooldown_ms"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            store_path: PathBuf::new(),
            history_slot: String::new(),
            checkpoint: CheckpointPolicy::default(),
            cooldown_ms: 0,
        }
    }

    /// Create AppConfig with system-default paths for production use
    ///
    /// `data_dir` is the base directory for app data, computed by the caller
    /// with platform-specific logic (e.g. the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            store_path: data_dir.join("store.json"),
            history_slot: HISTORY_SLOT.to_string(),
            checkpoint: CheckpointPolicy::EveryMutation,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}
