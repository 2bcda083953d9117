use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use bc_core::ports::{ClockPort, SystemClipboardPort};
use bc_core::{ScanId, ScanKind, ScanRecord, TimestampMs, WifiCredential};

/// Turn one decoded payload into clipboard content and a fresh [`ScanRecord`].
///
/// Wi-Fi credential payloads are reduced to their password; anything else is
/// copied verbatim. Storing the record is left to the caller.
pub struct IntakeScan {
    clipboard: Arc<dyn SystemClipboardPort>,
    clock: Arc<dyn ClockPort>,
}

impl IntakeScan {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { clipboard, clock }
    }

    /// Run the intake for `raw_payload` reported with `source_kind`.
    ///
    /// A failing clipboard write is logged and does not prevent the record
    /// from being created.
    #[tracing::instrument(
        name = "usecase.intake_scan.execute",
        skip(self, raw_payload),
        fields(source_kind = %source_kind, payload_len = raw_payload.len())
    )]
    pub fn execute(&self, raw_payload: &str, source_kind: &ScanKind) -> Result<ScanRecord> {
        let credential = WifiCredential::parse(raw_payload);
        let (content, kind) = match credential {
            Some(WifiCredential {
                password: Some(password),
                ssid,
                ..
            }) => {
                debug!(ssid = ?ssid, "wifi payload detected, copying password only");
                (password, ScanKind::wifi_password())
            }
            _ => (raw_payload.to_string(), source_kind.clone()),
        };

        if let Err(err) = self.clipboard.write_text(&content) {
            warn!(error = %err, "failed to write scan to clipboard");
        }

        let record = ScanRecord::new(
            ScanId::new(),
            content,
            kind,
            TimestampMs::from_epoch_millis(self.clock.now_ms()),
        );
        debug!(scan_id = %record.id, kind = %record.kind, "scan intake completed");
        Ok(record)
    }
}
