//! Analysis storage: the repository the HTTP layer persists reports through.
//!
//! The scoring engine never touches this. `AppState` carries an
//! `Arc<dyn AnalysisStore>`; `JsonFileStore` is the default backend.

pub mod json_file;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::analysis::AnalysisRecord;

pub use json_file::JsonFileStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Background write task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    async fn save(&self, record: AnalysisRecord) -> Result<(), StoreError>;

    /// All records for a user, newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<AnalysisRecord>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, StoreError>;

    async fn count(&self) -> Result<usize, StoreError>;
}
