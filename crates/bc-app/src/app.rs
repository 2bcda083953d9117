use std::sync::Arc;
use std::time::Duration;

use bc_core::history::HISTORY_SLOT;
use bc_core::session::DEFAULT_COOLDOWN_MS;
use bc_core::{AppConfig, CheckpointPolicy};

use crate::deps::AppDeps;
use crate::history::HistoryStore;
use crate::session::ScanSessionCoordinator;
use crate::usecases::{CopyFromHistory, ImportPhotoScan, IntakeScan};

/// Values the application layer reads from [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub history_slot: String,
    pub checkpoint: CheckpointPolicy,
    pub cooldown: Duration,
}

impl AppSettings {
    /// An empty slot name or a zero cooldown in the config means "not set"
    /// and falls back to `scannedCodes` and one second.
    pub fn from_config(config: &AppConfig) -> Self {
        let history_slot = if config.history_slot.is_empty() {
            HISTORY_SLOT.to_string()
        } else {
            config.history_slot.clone()
        };
        let cooldown_ms = if config.cooldown_ms == 0 {
            DEFAULT_COOLDOWN_MS
        } else {
            config.cooldown_ms
        };

        Self {
            history_slot,
            checkpoint: config.checkpoint,
            cooldown: Duration::from_millis(cooldown_ms),
        }
    }
}

/// The application runtime.
pub struct App {
    deps: AppDeps,
    history: Arc<HistoryStore>,
    intake: Arc<IntakeScan>,
    session: Arc<ScanSessionCoordinator>,
}

impl App {
    /// Create new App instance from dependencies
    ///
    /// This constructor signature IS the dependency manifest.
    pub fn new(deps: AppDeps, settings: AppSettings) -> Self {
        let history = Arc::new(HistoryStore::new(
            deps.kv_store.clone(),
            settings.history_slot,
            settings.checkpoint,
        ));
        let intake = Arc::new(IntakeScan::new(deps.clipboard.clone(), deps.clock.clone()));
        let session = Arc::new(ScanSessionCoordinator::new(
            intake.clone(),
            history.clone(),
            deps.haptics.clone(),
            deps.scanner_ui.clone(),
            deps.cooldown_timer.clone(),
            settings.cooldown,
        ));

        Self {
            deps,
            history,
            intake,
            session,
        }
    }

    pub fn history(&self) -> Arc<HistoryStore> {
        self.history.clone()
    }

    pub fn intake(&self) -> Arc<IntakeScan> {
        self.intake.clone()
    }

    pub fn session(&self) -> Arc<ScanSessionCoordinator> {
        self.session.clone()
    }

    pub fn import_photo_scan(&self) -> ImportPhotoScan {
        ImportPhotoScan::new(self.deps.detector.clone(), self.intake.clone(), self.history.clone())
    }

    pub fn copy_from_history(&self) -> CopyFromHistory {
        CopyFromHistory::new(self.history.clone(), self.deps.clipboard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn settings_take_storage_and_scanner_values_from_config() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/bc"));

        let settings = AppSettings::from_config(&config);

        assert_eq!(settings.history_slot, "scannedCodes");
        assert_eq!(settings.checkpoint, CheckpointPolicy::EveryMutation);
        assert_eq!(settings.cooldown, Duration::from_secs(1));
    }

    #[test]
    fn unset_slot_and_cooldown_fall_back_to_defaults() {
        let config = AppConfig {
            store_path: PathBuf::from("/tmp/bc/store.json"),
            ..AppConfig::empty()
        };

        let settings = AppSettings::from_config(&config);

        assert_eq!(settings.history_slot, "scannedCodes");
        assert_eq!(settings.cooldown, Duration::from_millis(1_000));
    }

    #[test]
    fn explicit_slot_and_cooldown_are_kept() {
        let config = AppConfig {
            history_slot: "codes".to_string(),
            cooldown_ms: 250,
            ..AppConfig::empty()
        };

        let settings = AppSettings::from_config(&config);

        assert_eq!(settings.history_slot, "codes");
        assert_eq!(settings.cooldown, Duration::from_millis(250));
    }
}
