//! Barcode Copier Application Orchestration Layer
//!
//! This crate contains the scan use cases, the persisted history store and
//! the live scanner session runtime.

pub mod app;
pub mod app_paths;
pub mod deps;
pub mod history;
pub mod session;
pub mod usecases;

pub use app::{App, AppSettings};
pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use history::HistoryStore;
pub use session::{
    session_channel, ScanSessionCoordinator, ScanSessionRuntime, SessionCommand, SessionHandle,
};
pub use usecases::{CopyFromHistory, ImportPhotoScan, IntakeScan};
