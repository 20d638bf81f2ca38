pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies/import                                   upload (POST)
/// /movies/import/uuids                             list import ids
/// /movies/import/{id}/awards                       min/max win intervals
/// /movies/import/{id}/list                         movies of one import
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
