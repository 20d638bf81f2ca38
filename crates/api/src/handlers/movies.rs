//! Handlers for movie list import and award-interval analysis.

use awards_core::service::check_upload;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::{ImportResponse, MovieResponse, SummarizedAwardsResponse};
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

// ── Import ───────────────────────────────────────────────────────────

/// POST /api/v1/movies/import
///
/// Accept a multipart upload with a `file` field holding a `;`-delimited
/// movie list and persist it as a new batch.
pub async fn import_movies(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ImportResponse>)> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or_else(|| {
        AppError::BadRequest(format!("Missing multipart field '{UPLOAD_FIELD}'"))
    })?;

    check_upload(&data, &filename)?;

    let import_id = state.service.import(&data, &filename).await?;

    Ok((
        StatusCode::CREATED,
        Json(ImportResponse {
            uuid_imported: import_id,
        }),
    ))
}

// ── Queries ──────────────────────────────────────────────────────────

/// GET /api/v1/movies/import/{id}/awards
///
/// Producers with the shortest and longest gap between consecutive wins.
pub async fn get_summarized_awards(
    State(state): State<AppState>,
    Path(import_id): Path<String>,
) -> AppResult<Json<SummarizedAwardsResponse>> {
    let summary = state.service.analyze(&import_id).await?;
    Ok(Json(summary.into()))
}

/// GET /api/v1/movies/import/uuids
pub async fn list_import_ids(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let ids = state.service.list_import_ids().await?;
    Ok(Json(ids))
}

/// GET /api/v1/movies/import/{id}/list
///
/// Every movie of a batch. Unknown ids return an empty list.
pub async fn list_movies(
    State(state): State<AppState>,
    Path(import_id): Path<String>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    let records = state.service.list_records(&import_id).await?;
    Ok(Json(records.into_iter().map(MovieResponse::from).collect()))
}
