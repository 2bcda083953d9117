//! Scan domain models.

mod kind;
mod record;
mod symbol;
mod timestamp;
pub mod wifi;

pub use kind::ScanKind;
pub use record::{DedupeKey, ScanRecord};
pub use symbol::DecodedSymbol;
pub use timestamp::TimestampMs;
pub use wifi::{extract_wifi_password, WifiCredential};
