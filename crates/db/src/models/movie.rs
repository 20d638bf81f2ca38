//! Movie row model.

use awards_core::movie::MovieRecord;
use awards_core::types::{DbId, ImportId, Timestamp};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub year: i32,
    pub title: String,
    pub studios: Option<String>,
    pub producers: Option<String>,
    pub winner: bool,
    pub import_id: ImportId,
    pub created_at: Timestamp,
}

impl From<MovieRow> for MovieRecord {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            year: row.year,
            title: row.title,
            studios: row.studios,
            producers: row.producers,
            winner: row.winner,
            import_id: row.import_id,
            created_at: row.created_at,
        }
    }
}
