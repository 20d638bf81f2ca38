//! [`RecordStore`] backed by PostgreSQL.

use async_trait::async_trait;
use awards_core::error::CoreError;
use awards_core::movie::{MovieRecord, NewMovie};
use awards_core::store::RecordStore;
use awards_core::types::ImportId;

use crate::repositories::MovieRepo;
use crate::DbPool;

/// Stores batches in the `movies` table.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: DbPool,
}

impl PgRecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn save_all(&self, movies: Vec<NewMovie>) -> Result<Vec<MovieRecord>, CoreError> {
        let rows = MovieRepo::insert_batch(&self.pool, &movies)
            .await
            .map_err(CoreError::storage)?;
        tracing::debug!(rows = rows.len(), "Inserted movie batch");
        Ok(rows.into_iter().map(MovieRecord::from).collect())
    }

    async fn find_by_import_id(&self, import_id: &str) -> Result<Vec<MovieRecord>, CoreError> {
        let rows = MovieRepo::find_by_import_id(&self.pool, import_id)
            .await
            .map_err(CoreError::storage)?;
        Ok(rows.into_iter().map(MovieRecord::from).collect())
    }

    async fn list_import_ids(&self) -> Result<Vec<ImportId>, CoreError> {
        MovieRepo::list_import_ids(&self.pool)
            .await
            .map_err(CoreError::storage)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(CoreError::storage)
    }
}
