//! Response shapes for the movie endpoints.
//!
//! Pure field copies from core types into the camelCase JSON the API
//! exposes. No computation happens here.

use awards_core::intervals::{ProducerInterval, SummarizedAwards};
use awards_core::movie::MovieRecord;
use awards_core::types::{DbId, ImportId, Timestamp};
use serde::Serialize;

/// Body of a successful `POST /movies/import`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub uuid_imported: ImportId,
}

/// One stored movie as returned by `GET /movies/import/{id}/list`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: DbId,
    pub year: i32,
    pub title: String,
    pub studios: Option<String>,
    pub producers: Option<String>,
    pub winner: bool,
    pub import_uuid: ImportId,
    pub created_at: Timestamp,
}

impl From<MovieRecord> for MovieResponse {
    fn from(record: MovieRecord) -> Self {
        Self {
            id: record.id,
            year: record.year,
            title: record.title,
            studios: record.studios,
            producers: record.producers,
            winner: record.winner,
            import_uuid: record.import_id,
            created_at: record.created_at,
        }
    }
}

/// One producer gap inside an awards summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerIntervalResponse {
    pub producer: String,
    pub interval: u32,
    pub previous_win: i32,
    pub following_win: i32,
}

impl From<ProducerInterval> for ProducerIntervalResponse {
    fn from(interval: ProducerInterval) -> Self {
        Self {
            producer: interval.producer,
            interval: interval.interval,
            previous_win: interval.previous_win,
            following_win: interval.following_win,
        }
    }
}

/// Body of `GET /movies/import/{id}/awards`.
#[derive(Debug, Serialize)]
pub struct SummarizedAwardsResponse {
    pub min: Vec<ProducerIntervalResponse>,
    pub max: Vec<ProducerIntervalResponse>,
}

impl From<SummarizedAwards> for SummarizedAwardsResponse {
    fn from(summary: SummarizedAwards) -> Self {
        Self {
            min: summary.min.into_iter().map(Into::into).collect(),
            max: summary.max.into_iter().map(Into::into).collect(),
        }
    }
}
