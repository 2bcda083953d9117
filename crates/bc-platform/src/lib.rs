//! Platform adapters for Barcode Copier.

pub mod adapters;
pub mod app_dirs;
pub mod clipboard;

pub use adapters::{HeadlessScannerUi, LoggingHaptics, RxingStillImageDetector};
pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::{SystemClipboard, UnavailableClipboard};
