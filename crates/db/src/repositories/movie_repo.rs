//! Repository for the `movies` table.

use awards_core::movie::NewMovie;
use awards_core::types::ImportId;
use sqlx::PgPool;

use crate::models::movie::MovieRow;

/// Column list for `movies` queries.
const COLUMNS: &str = "\
    id, year, title, studios, producers, winner, import_id, created_at";

/// Provides batch insert and lookup for imported movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a whole batch in one transaction.
    ///
    /// `created_at` defaults to `now()`, which is fixed for the duration of
    /// the transaction, so every row of the batch shares one timestamp.
    pub async fn insert_batch(
        pool: &PgPool,
        movies: &[NewMovie],
    ) -> Result<Vec<MovieRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut rows = Vec::with_capacity(movies.len());

        let query = format!(
            "INSERT INTO movies (year, title, studios, producers, winner, import_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );

        for movie in movies {
            let row = sqlx::query_as::<_, MovieRow>(&query)
                .bind(movie.year)
                .bind(&movie.title)
                .bind(movie.studios.as_deref())
                .bind(movie.producers.as_deref())
                .bind(movie.winner)
                .bind(&movie.import_id)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }

        tx.commit().await?;
        Ok(rows)
    }

    /// All rows of one batch in insertion order.
    pub async fn find_by_import_id(
        pool: &PgPool,
        import_id: &str,
    ) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE import_id = $1 ORDER BY id");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(import_id)
            .fetch_all(pool)
            .await
    }

    /// Distinct import ids, most recently created batch first.
    pub async fn list_import_ids(pool: &PgPool) -> Result<Vec<ImportId>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT import_id FROM movies \
             GROUP BY import_id \
             ORDER BY MAX(created_at) DESC, MAX(id) DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Number of rows in one batch.
    pub async fn count_by_import_id(pool: &PgPool, import_id: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies WHERE import_id = $1")
            .bind(import_id)
            .fetch_one(pool)
            .await
    }
}
