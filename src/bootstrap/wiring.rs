//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Create infra implementations (key-value store, clock, timer)
//! - Create platform implementations (clipboard, detector, feedback)
//! - Inject all dependencies into App
//!
//! **This is the only place allowed to depend on bc-infra + bc-platform +
//! bc-app simultaneously.** The privilege is for assembly only.

use std::sync::Arc;

use tracing::{info, warn};

use bc_app::{session_channel, App, AppDeps, AppSettings, ScanSessionRuntime, SessionHandle};
use bc_core::config::AppConfig;
use bc_core::ports::{KeyValueStorePort, SystemClipboardPort};
use bc_infra::{CooldownTimer, FileKeyValueStore, InMemoryKeyValueStore, SystemClock};
use bc_platform::{
    HeadlessScannerUi, LoggingHaptics, RxingStillImageDetector, SystemClipboard,
    UnavailableClipboard,
};

const SESSION_CHANNEL_CAPACITY: usize = 64;

/// Assembled application plus the session runtime that still has to be spawned.
pub struct WiredApp {
    pub app: App,
    pub session: SessionHandle,
    pub runtime: ScanSessionRuntime,
}

pub fn wire_app(config: &AppConfig) -> WiredApp {
    let (session, commands) = session_channel(SESSION_CHANNEL_CAPACITY);

    let deps = AppDeps {
        clipboard: create_clipboard(),
        kv_store: create_kv_store(config),
        detector: Arc::new(RxingStillImageDetector::new()),
        haptics: Arc::new(LoggingHaptics),
        scanner_ui: Arc::new(HeadlessScannerUi::new(session.dismiss_callback())),
        cooldown_timer: Arc::new(CooldownTimer::new(session.cooldown_callback())),
        clock: Arc::new(SystemClock),
    };

    let app = App::new(deps, AppSettings::from_config(config));
    let runtime = ScanSessionRuntime::new(app.session(), commands);

    WiredApp {
        app,
        session,
        runtime,
    }
}

fn create_clipboard() -> Arc<dyn SystemClipboardPort> {
    match SystemClipboard::new() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(err) => {
            warn!(error = %err, "system clipboard unavailable, scans will not be copied");
            Arc::new(UnavailableClipboard)
        }
    }
}

fn create_kv_store(config: &AppConfig) -> Arc<dyn KeyValueStorePort> {
    if config.store_path.as_os_str().is_empty() {
        warn!("no store path configured, history will not survive restarts");
        return Arc::new(InMemoryKeyValueStore::new());
    }
    info!(path = %config.store_path.display(), "using file key-value store");
    Arc::new(FileKeyValueStore::new(config.store_path.clone()))
}
