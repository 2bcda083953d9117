//! Tests for the [`CopyFromHistory`] use case.

use std::sync::{Arc, Mutex};

use anyhow::Result;

use bc_app::{CopyFromHistory, HistoryStore};
use bc_core::ports::SystemClipboardPort;
use bc_core::{CheckpointPolicy, ScanId, ScanKind, ScanRecord, TimestampMs};
use bc_infra::InMemoryKeyValueStore;

#[derive(Default)]
struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl SystemClipboardPort for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

async fn history_with(records: &[ScanRecord]) -> Arc<HistoryStore> {
    let history = Arc::new(HistoryStore::new(
        Arc::new(InMemoryKeyValueStore::new()),
        "scannedCodes",
        CheckpointPolicy::EveryMutation,
    ));
    for r in records {
        history.append(r.clone()).await;
    }
    history
}

fn record(content: &str, kind: ScanKind) -> ScanRecord {
    ScanRecord::new(
        ScanId::new(),
        content.to_string(),
        kind,
        TimestampMs::from_epoch_millis(0),
    )
}

#[tokio::test]
async fn copies_stored_content() {
    let ean = record("4006381333931", ScanKind::new("org.gs1.EAN-13"));
    let clipboard = Arc::new(RecordingClipboard::default());
    let uc = CopyFromHistory::new(history_with(&[ean.clone()]).await, clipboard.clone());

    assert!(uc.execute(&ean.id).await.unwrap());
    assert_eq!(*clipboard.writes.lock().unwrap(), vec!["4006381333931".to_string()]);
}

#[tokio::test]
async fn legacy_wifi_qr_record_copies_password() {
    let legacy = record("WIFI:S:Home;T:WPA;P:secret123;;", ScanKind::qr_code());
    let clipboard = Arc::new(RecordingClipboard::default());
    let uc = CopyFromHistory::new(history_with(&[legacy.clone()]).await, clipboard.clone());

    assert!(uc.execute(&legacy.id).await.unwrap());
    assert_eq!(*clipboard.writes.lock().unwrap(), vec!["secret123".to_string()]);
}

#[tokio::test]
async fn wifi_payload_under_other_kind_is_copied_verbatim() {
    let photo = record("WIFI:S:Home;P:pw;;", ScanKind::photo_barcode());
    let clipboard = Arc::new(RecordingClipboard::default());
    let uc = CopyFromHistory::new(history_with(&[photo.clone()]).await, clipboard.clone());

    uc.execute(&photo.id).await.unwrap();
    assert_eq!(*clipboard.writes.lock().unwrap(), vec!["WIFI:S:Home;P:pw;;".to_string()]);
}

#[tokio::test]
async fn unknown_id_returns_false() {
    let clipboard = Arc::new(RecordingClipboard::default());
    let uc = CopyFromHistory::new(history_with(&[]).await, clipboard.clone());

    assert!(!uc.execute(&ScanId::from("missing")).await.unwrap());
    assert!(clipboard.writes.lock().unwrap().is_empty());
}
