use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use bc_core::ports::StillImageDetectorPort;
use bc_core::{ScanKind, ScanRecord};

use super::IntakeScan;
use crate::history::HistoryStore;

/// Scan a code from a picked photo and store it in the history.
pub struct ImportPhotoScan {
    detector: Arc<dyn StillImageDetectorPort>,
    intake: Arc<IntakeScan>,
    history: Arc<HistoryStore>,
}

impl ImportPhotoScan {
    pub fn new(
        detector: Arc<dyn StillImageDetectorPort>,
        intake: Arc<IntakeScan>,
        history: Arc<HistoryStore>,
    ) -> Self {
        Self {
            detector,
            intake,
            history,
        }
    }

    /// Returns the stored record, or `None` when the photo holds no code,
    /// cannot be decoded, or duplicates an existing record.
    #[tracing::instrument(
        name = "usecase.import_photo_scan.execute",
        skip(self, image_bytes),
        fields(image_len = image_bytes.len())
    )]
    pub async fn execute(&self, image_bytes: &[u8]) -> Result<Option<ScanRecord>> {
        let symbol = match self.detector.detect(image_bytes) {
            Ok(Some(symbol)) => symbol,
            Ok(None) => {
                info!("no code found in photo");
                return Ok(None);
            }
            Err(err) => {
                warn!(error = %err, "photo decode failed");
                return Ok(None);
            }
        };
        debug!(symbology = %symbol.symbology, "code found in photo");

        let record = self.intake.execute(&symbol.payload, &ScanKind::photo_barcode())?;
        if !self.history.append(record.clone()).await {
            return Ok(None);
        }
        Ok(Some(record))
    }
}
