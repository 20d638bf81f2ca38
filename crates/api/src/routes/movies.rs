use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Mount movie import and analysis routes.
///
/// ```text
/// POST   /import                  import_movies
/// GET    /import/uuids            list_import_ids
/// GET    /import/{id}/awards      get_summarized_awards
/// GET    /import/{id}/list        list_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/import", post(movies::import_movies))
        .route("/import/uuids", get(movies::list_import_ids))
        .route("/import/{id}/awards", get(movies::get_summarized_awards))
        .route("/import/{id}/list", get(movies::list_movies))
}
