use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use bc_core::ports::SystemClipboardPort;
use bc_core::ScanId;

use crate::history::HistoryStore;

/// Copy a stored scan back into the system clipboard.
///
/// Records of kind `org.iso.QRCode` that still hold a full Wi-Fi payload
/// (stored before passwords were extracted at intake) copy the password.
pub struct CopyFromHistory {
    history: Arc<HistoryStore>,
    clipboard: Arc<dyn SystemClipboardPort>,
}

impl CopyFromHistory {
    pub fn new(history: Arc<HistoryStore>, clipboard: Arc<dyn SystemClipboardPort>) -> Self {
        Self { history, clipboard }
    }

    /// Returns `false` when no record has `scan_id`.
    #[tracing::instrument(
        name = "usecase.copy_from_history.execute",
        skip(self),
        fields(scan_id = %scan_id)
    )]
    pub async fn execute(&self, scan_id: &ScanId) -> Result<bool> {
        let Some(record) = self.history.find(scan_id).await else {
            warn!("scan not found in history");
            return Ok(false);
        };

        self.clipboard.write_text(&record.clipboard_text())?;
        info!("scan copied from history");
        Ok(true)
    }
}
