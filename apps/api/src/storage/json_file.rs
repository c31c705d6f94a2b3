//! JSON-file analysis store.
//!
//! All records live in memory behind a `RwLock`; every save rewrites the whole
//! file through a temp file + rename so a crash never leaves a torn file.
//! Writes are serialized by the write lock.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::models::analysis::AnalysisRecord;
use crate::storage::{AnalysisStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
    records: RwLock<Vec<AnalysisRecord>>,
}

impl JsonFileStore {
    /// Opens the store, loading existing records. A missing file starts empty;
    /// an unreadable or corrupt file is an error so it is never overwritten.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records: Vec<AnalysisRecord> = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No analyses file at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "Loaded {} analyses from {}",
            records.len(),
            path.display()
        );

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    async fn persist(&self, records: &[AnalysisRecord]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes)).await??;
        debug!("Saved {} analyses to {}", records.len(), self.path.display());
        Ok(())
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

#[async_trait]
impl AnalysisStore for JsonFileStore {
    async fn save(&self, record: AnalysisRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.push(record);

        if let Err(e) = self.persist(&records).await {
            // Keep memory and disk in agreement.
            records.pop();
            error!("Failed to persist analyses to {}: {e}", self.path.display());
            return Err(e);
        }
        Ok(())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<AnalysisRecord>, StoreError> {
        let records = self.records.read().await;
        let mut matching: Vec<AnalysisRecord> = records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().await.len())
    }
}
