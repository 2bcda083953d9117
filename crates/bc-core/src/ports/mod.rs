//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The camera, the detector, the system
//! clipboard, durable storage and the UI are all reached through these traits.

pub mod app_dirs;
mod clipboard;
mod clock;
mod detector;
pub mod errors;
mod feedback;
pub mod key_value_store;
mod scanner_ui;
mod timer;

pub use app_dirs::AppDirsPort;
pub use clipboard::SystemClipboardPort;
pub use clock::*;
pub use detector::StillImageDetectorPort;
pub use errors::AppDirsError;
pub use feedback::HapticFeedbackPort;
pub use key_value_store::{KeyValueStoreError, KeyValueStorePort};
pub use scanner_ui::ScannerUiPort;
pub use timer::CooldownTimerPort;
