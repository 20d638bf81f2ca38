//! Record store abstraction consumed by [`AnalysisService`](crate::service::AnalysisService).
//!
//! The service never touches storage directly. Production wires a
//! PostgreSQL-backed store; tests and database-less runs use
//! [`InMemoryRecordStore`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::movie::{MovieRecord, NewMovie};
use crate::types::{DbId, ImportId};

/// Bulk storage for movie records grouped by import id.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist one batch atomically, assigning ids and creation time.
    ///
    /// Either every record becomes visible or none does.
    async fn save_all(&self, movies: Vec<NewMovie>) -> Result<Vec<MovieRecord>, CoreError>;

    /// All records of a batch in insertion order. Unknown ids yield an empty list.
    async fn find_by_import_id(&self, import_id: &str) -> Result<Vec<MovieRecord>, CoreError>;

    /// Distinct import ids, most recently created batch first.
    async fn list_import_ids(&self) -> Result<Vec<ImportId>, CoreError>;

    /// Whether the backing storage is reachable.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory implementation
// ---------------------------------------------------------------------------

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<MovieRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records across all batches.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn save_all(&self, movies: Vec<NewMovie>) -> Result<Vec<MovieRecord>, CoreError> {
        let mut records = self.records.write().await;
        let created_at = chrono::Utc::now();
        let next_id = records.last().map_or(1, |r| r.id + 1);

        let saved: Vec<MovieRecord> = movies
            .into_iter()
            .zip(next_id..)
            .map(|(movie, id): (NewMovie, DbId)| MovieRecord::from_new(movie, id, created_at))
            .collect();

        records.extend(saved.iter().cloned());
        Ok(saved)
    }

    async fn find_by_import_id(&self, import_id: &str) -> Result<Vec<MovieRecord>, CoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.import_id == import_id)
            .cloned()
            .collect())
    }

    async fn list_import_ids(&self) -> Result<Vec<ImportId>, CoreError> {
        let records = self.records.read().await;
        let mut ids: Vec<ImportId> = Vec::new();
        // Records are appended batch by batch, so walking backwards visits
        // the newest batch first.
        for record in records.iter().rev() {
            if !ids.contains(&record.import_id) {
                ids.push(record.import_id.clone());
            }
        }
        Ok(ids)
    }
}
