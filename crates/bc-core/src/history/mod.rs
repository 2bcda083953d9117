//! Scan history domain.
//!
//! [`ScanHistory`] is the ordered, de-duplicated sequence of records.
//! Insertion order is the source of truth; [`group_by_day`] derives the
//! display view without touching it.

mod grouping;
mod scan_history;

pub use grouping::{group_by_day, HistoryGroup, TODAY_LABEL, YESTERDAY_LABEL};
pub use scan_history::ScanHistory;

/// Key-value slot holding the persisted history snapshot.
pub const HISTORY_SLOT: &str = "scannedCodes";
