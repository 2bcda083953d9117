//! # Application Dependencies
//!
//! This module defines the dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;
use bc_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Clipboard dependencies
    pub clipboard: Arc<dyn SystemClipboardPort>,

    // Storage dependencies
    pub kv_store: Arc<dyn KeyValueStorePort>,

    // Scanner dependencies
    pub detector: Arc<dyn StillImageDetectorPort>,
    pub haptics: Arc<dyn HapticFeedbackPort>,
    pub scanner_ui: Arc<dyn ScannerUiPort>,
    pub cooldown_timer: Arc<dyn CooldownTimerPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
