//! Key-value store persisted as one JSON document.
//!
//! The file holds an object mapping each key to its base64 encoded value.
//! Every write replaces the whole file through a temporary sibling and a
//! rename.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use bc_core::ports::{KeyValueStoreError, KeyValueStorePort};

type Entries = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create store dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    async fn read_entries(&self) -> Result<Entries> {
        let content = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(KeyValueStoreError::Io(e))
                    .with_context(|| format!("read store failed: {}", self.path.display()))
            }
        };
        serde_json::from_slice(&content)
            .map_err(|e| KeyValueStoreError::Corrupted(e.to_string()))
            .with_context(|| format!("parse store failed: {}", self.path.display()))
    }

    async fn atomic_write(&self, entries: &Entries) -> Result<()> {
        self.ensure_parent_dir().await?;

        let content = serde_json::to_vec_pretty(entries).context("serialize store failed")?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp store failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp store to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.read_entries().await?;
        let Some(encoded) = entries.get(key) else {
            return Ok(None);
        };
        let value = STANDARD
            .decode(encoded)
            .map_err(|e| KeyValueStoreError::Corrupted(format!("key {key}: {e}")))?;
        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), STANDARD.encode(&value));
        self.atomic_write(&entries).await?;
        debug!(key, bytes = value.len(), path = %self.path.display(), "store value written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.atomic_write(&entries).await?;
            debug!(key, "store value removed");
        }
        Ok(())
    }
}
