//! Persisted scan history.
//!
//! [`HistoryStore`] is the single owner of the in-memory [`ScanHistory`]. Every
//! operation runs under one async mutex, and the snapshot is written to the
//! key-value slot while that lock is held so saves land in mutation order.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, TimeZone};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use bc_core::history::HistoryGroup;
use bc_core::ports::KeyValueStorePort;
use bc_core::{CheckpointPolicy, ScanHistory, ScanId, ScanRecord};

pub struct HistoryStore {
    history: Mutex<ScanHistory>,
    store: Arc<dyn KeyValueStorePort>,
    slot: String,
    policy: CheckpointPolicy,
}

impl HistoryStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>, slot: impl Into<String>, policy: CheckpointPolicy) -> Self {
        Self {
            history: Mutex::new(ScanHistory::new()),
            store,
            slot: slot.into(),
            policy,
        }
    }

    /// Replace the in-memory history with the persisted snapshot.
    ///
    /// A missing slot, an unreadable store or an undecodable snapshot all
    /// leave the history empty.
    #[tracing::instrument(name = "history_store.load", skip(self), fields(slot = %self.slot))]
    pub async fn load(&self) {
        let mut history = self.history.lock().await;
        let records = match self.read_snapshot().await {
            Ok(Some(records)) => records,
            Ok(None) => {
                debug!("no persisted history");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "failed to load history, starting empty");
                Vec::new()
            }
        };
        info!(count = records.len(), "history loaded");
        history.replace_all(records);
    }

    /// Write the current snapshot. Failures are logged only.
    pub async fn save(&self) {
        let history = self.history.lock().await;
        self.write_snapshot(&history).await;
    }

    /// Save regardless of the checkpoint policy (suspend, shutdown).
    pub async fn checkpoint(&self) {
        debug!("history checkpoint requested");
        self.save().await;
    }

    /// Insert `record` unless a record with the same `(content, kind)` exists.
    pub async fn append(&self, record: ScanRecord) -> bool {
        let mut history = self.history.lock().await;
        let scan_id = record.id.clone();
        if !history.append(record) {
            debug!(scan_id = %scan_id, "duplicate scan dropped");
            return false;
        }
        debug!(scan_id = %scan_id, count = history.len(), "scan appended to history");
        self.after_mutation(&history).await;
        true
    }

    /// Remove records selected by index within a display group.
    pub async fn remove_at(&self, group_records: &[ScanRecord], indices: &[usize]) -> usize {
        let mut history = self.history.lock().await;
        let removed = history.remove_at(group_records, indices);
        if removed > 0 {
            info!(removed, "history records removed");
            self.after_mutation(&history).await;
        }
        removed
    }

    pub async fn remove_by_id(&self, id: &ScanId) -> bool {
        let mut history = self.history.lock().await;
        let removed = history.remove_by_id(id);
        if removed {
            info!(scan_id = %id, "history record removed");
            self.after_mutation(&history).await;
        }
        removed
    }

    pub async fn clear(&self) {
        let mut history = self.history.lock().await;
        history.clear();
        info!("history cleared");
        self.after_mutation(&history).await;
    }

    pub async fn find(&self, id: &ScanId) -> Option<ScanRecord> {
        self.history.lock().await.find_by_id(id).cloned()
    }

    pub async fn grouped_for_display<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> Vec<HistoryGroup> {
        self.history.lock().await.grouped_for_display(today, tz)
    }

    /// Ordered copy of every stored record.
    pub async fn snapshot(&self) -> Vec<ScanRecord> {
        self.history.lock().await.records().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.history.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.history.lock().await.is_empty()
    }

    async fn after_mutation(&self, history: &ScanHistory) {
        if self.policy.saves_on_mutation() {
            self.write_snapshot(history).await;
        }
    }

    async fn read_snapshot(&self) -> Result<Option<Vec<ScanRecord>>> {
        let Some(bytes) = self
            .store
            .get(&self.slot)
            .await
            .context("failed to read history slot")?
        else {
            return Ok(None);
        };
        let records: Vec<ScanRecord> =
            serde_json::from_slice(&bytes).context("failed to decode history snapshot")?;
        Ok(Some(records))
    }

    /// An empty history removes the slot; loading treats both the same.
    async fn write_snapshot(&self, history: &ScanHistory) {
        if history.is_empty() {
            if let Err(err) = self.store.remove(&self.slot).await {
                warn!(error = %err, slot = %self.slot, "failed to remove history slot");
            }
            return;
        }

        let bytes = match serde_json::to_vec(history.records()) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "failed to encode history snapshot");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.slot, bytes).await {
            warn!(error = %err, slot = %self.slot, "failed to save history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bc_core::{ScanKind, TimestampMs};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MemoryStore {
        values: std::sync::Mutex<HashMap<String, Vec<u8>>>,
        sets: AtomicUsize,
        fail_writes: bool,
    }

    #[async_trait]
    impl KeyValueStorePort for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
            self.sets.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                anyhow::bail!("disk full");
            }
            self.values.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn record(content: &str, ts: i64) -> ScanRecord {
        ScanRecord::new(
            ScanId::new(),
            content.to_string(),
            ScanKind::qr_code(),
            TimestampMs::from_epoch_millis(ts),
        )
    }

    #[tokio::test]
    async fn append_saves_on_every_mutation_by_default() {
        let kv = Arc::new(MemoryStore::default());
        let store = HistoryStore::new(kv.clone(), "scannedCodes", CheckpointPolicy::EveryMutation);

        assert!(store.append(record("a", 1)).await);
        assert!(!store.append(record("a", 2)).await);

        assert_eq!(store.len().await, 1);
        assert_eq!(kv.sets.load(Ordering::SeqCst), 1);
        let saved: Vec<ScanRecord> =
            serde_json::from_slice(&kv.get("scannedCodes").await.unwrap().unwrap()).unwrap();
        assert_eq!(saved, store.snapshot().await);
    }

    #[tokio::test]
    async fn on_suspend_policy_saves_only_on_checkpoint() {
        let kv = Arc::new(MemoryStore::default());
        let store = HistoryStore::new(kv.clone(), "scannedCodes", CheckpointPolicy::OnSuspend);

        store.append(record("a", 1)).await;
        store.clear().await;
        store.append(record("b", 2)).await;
        assert_eq!(kv.sets.load(Ordering::SeqCst), 0);

        store.checkpoint().await;
        assert_eq!(kv.sets.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn load_replaces_history_with_snapshot() {
        let kv = Arc::new(MemoryStore::default());
        let persisted = vec![record("old", 1), record("older", 0)];
        kv.set("scannedCodes", serde_json::to_vec(&persisted).unwrap())
            .await
            .unwrap();
        let store = HistoryStore::new(kv, "scannedCodes", CheckpointPolicy::EveryMutation);

        store.load().await;

        assert_eq!(store.snapshot().await, persisted);
    }

    #[tokio::test]
    async fn load_with_corrupt_snapshot_starts_empty() {
        let kv = Arc::new(MemoryStore::default());
        kv.set("scannedCodes", b"{not json".to_vec()).await.unwrap();
        let store = HistoryStore::new(kv, "scannedCodes", CheckpointPolicy::EveryMutation);
        store.append(record("in-memory", 1)).await;

        store.load().await;

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn save_failure_does_not_fail_mutation() {
        let kv = Arc::new(MemoryStore {
            fail_writes: true,
            ..Default::default()
        });
        let store = HistoryStore::new(kv, "scannedCodes", CheckpointPolicy::EveryMutation);

        assert!(store.append(record("a", 1)).await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn remove_at_and_remove_by_id_persist() {
        let kv = Arc::new(MemoryStore::default());
        let store = HistoryStore::new(kv.clone(), "scannedCodes", CheckpointPolicy::EveryMutation);
        let a = record("a", 1);
        let b = record("b", 2);
        store.append(a.clone()).await;
        store.append(b.clone()).await;

        assert_eq!(store.remove_at(&[b.clone()], &[0, 3]).await, 1);
        assert!(store.remove_by_id(&a.id).await);
        assert!(!store.remove_by_id(&a.id).await);

        assert!(store.is_empty().await);
        assert!(kv.get("scannedCodes").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_removes_slot_and_reload_is_empty() {
        let kv = Arc::new(MemoryStore::default());
        let store = HistoryStore::new(kv.clone(), "scannedCodes", CheckpointPolicy::EveryMutation);
        store.append(record("a", 1)).await;
        assert!(kv.get("scannedCodes").await.unwrap().is_some());

        store.clear().await;

        assert!(kv.get("scannedCodes").await.unwrap().is_none());
        let reopened = HistoryStore::new(kv, "scannedCodes", CheckpointPolicy::EveryMutation);
        reopened.load().await;
        assert!(reopened.is_empty().await);
    }
}
