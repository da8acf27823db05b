//! Flat-file record store
//!
//! Persists each record collection as one pretty-printed UTF-8 JSON array
//! file under the data directory. The store is always read in full, mutated
//! in memory, and written back in full; the logical operation exposed
//! upward is "append one record". Writes go through a temp file + rename so
//! a crash never leaves a half-written store behind. No locking: the
//! deployment is single-user, single-process, and the last writer wins.

use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Store over one JSON array file per record collection
#[derive(Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Create a record store rooted at the given data directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create the data directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Record store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Load all records of a store, in insertion order.
    ///
    /// A missing file is an empty store, not an error. A file that exists
    /// but cannot be parsed is a `StoreRead` error; callers on the write
    /// path must propagate it so a corrupt store is never overwritten.
    pub async fn load<T: DeserializeOwned>(&self, store_id: &str) -> Result<Vec<T>> {
        let path = self.path_for(store_id);

        if !path.exists() {
            tracing::debug!("Store file not found, treating as empty: {:?}", path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::StoreRead {
                store: store_id.to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| AppError::StoreRead {
            store: store_id.to_string(),
            reason: e.to_string(),
        })
    }

    /// Lenient variant of [`load`](Self::load) for display paths.
    ///
    /// An unreadable store is surfaced as "no data" with a logged warning.
    /// Never use this before a save: a write based on a failed read would
    /// silently truncate existing data.
    pub async fn load_or_empty<T: DeserializeOwned>(&self, store_id: &str) -> Vec<T> {
        match self.load(store_id).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Treating store '{}' as empty: {}", store_id, e);
                Vec::new()
            }
        }
    }

    /// Overwrite a store with the given record sequence
    pub async fn save<T: Serialize>(&self, store_id: &str, records: &[T]) -> Result<()> {
        let path = self.path_for(store_id);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content =
            serde_json::to_string_pretty(records).map_err(|e| AppError::StoreWrite {
                store: store_id.to_string(),
                reason: e.to_string(),
            })?;

        // Write to temp file first, then rename into place (atomic write)
        let temp_path = path.with_extension("json.tmp");
        let write = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.sync_all().await?;
            fs::rename(&temp_path, &path).await
        };

        if let Err(e) = write.await {
            // Don't leave the temp file behind for a later save to trip over
            let _ = fs::remove_file(&temp_path).await;
            return Err(AppError::StoreWrite {
                store: store_id.to_string(),
                reason: e.to_string(),
            });
        }

        tracing::debug!("Wrote store '{}' ({} records)", store_id, records.len());

        Ok(())
    }

    /// Append one record: strict load, push, write back.
    ///
    /// Fails without touching the file when the prior load fails.
    pub async fn append<T>(&self, store_id: &str, record: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let mut records = self.load::<T>(store_id).await?;
        records.push(record.clone());
        self.save(store_id, &records).await?;
        Ok(record)
    }

    /// Whether a store file exists on disk
    pub fn exists(&self, store_id: &str) -> bool {
        self.path_for(store_id).exists()
    }

    /// File path backing a store id
    pub fn path_for(&self, store_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", store_id))
    }

    /// Data directory this store is rooted at
    pub fn root(&self) -> &Path {
        &self.root
    }
}
