//! # bc-core
//!
//! Core domain models and business logic for Barcode Copier.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod config;
pub mod deep_link;
pub mod history;
pub mod ids;
pub mod ports;
pub mod scan;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, CheckpointPolicy};
pub use deep_link::{DeepLinkError, DeepLinkRequest};
pub use history::{HistoryGroup, ScanHistory};
pub use ids::{ScanId, SessionId};
pub use scan::{extract_wifi_password, DecodedSymbol, DedupeKey, ScanKind, ScanRecord, TimestampMs, WifiCredential};
pub use session::{ScanSessionAction, ScanSessionEvent, ScanSessionState, ScanSessionStateMachine};
