//! Movie records: the parsed form produced by an import and the stored form
//! handed back by a [`RecordStore`](crate::store::RecordStore).

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{DbId, ImportId, Timestamp};

/// A movie row as parsed from an upload, not yet persisted.
///
/// Length limits mirror the `VARCHAR(500)` and `VARCHAR(64)` columns of the
/// `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewMovie {
    pub year: i32,
    #[validate(length(max = 500), custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(length(max = 500))]
    pub studios: Option<String>,
    #[validate(length(max = 500))]
    pub producers: Option<String>,
    pub winner: bool,
    #[validate(length(min = 1, max = 64))]
    pub import_id: ImportId,
}

/// A stored movie row. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: DbId,
    pub year: i32,
    pub title: String,
    pub studios: Option<String>,
    pub producers: Option<String>,
    pub winner: bool,
    pub import_id: ImportId,
    pub created_at: Timestamp,
}

impl MovieRecord {
    /// Materialize a parsed movie with the id and creation time assigned by a store.
    pub fn from_new(movie: NewMovie, id: DbId, created_at: Timestamp) -> Self {
        Self {
            id,
            year: movie.year,
            title: movie.title,
            studios: movie.studios,
            producers: movie.producers,
            winner: movie.winner,
            import_id: movie.import_id,
            created_at,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
