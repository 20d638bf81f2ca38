//! Startup import of a CSV file named by `SEED_CSV_PATH`.
//!
//! Seeding never prevents startup: a missing file is a warning and a failed
//! import is logged as an error.

use std::path::Path;

use awards_core::service::AnalysisService;
use awards_core::types::ImportId;

/// Import the file at `path` as a new batch, returning its import id.
pub async fn seed_from_file(service: &AnalysisService, path: &Path) -> Option<ImportId> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Seed file not found, skipping");
            return None;
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read seed file");
            return None;
        }
    };

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match service.import(&bytes, &filename).await {
        Ok(import_id) => {
            tracing::info!(path = %path.display(), import_id = %import_id, "Seed file imported");
            Some(import_id)
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Seed import failed");
            None
        }
    }
}
