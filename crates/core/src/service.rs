//! Import orchestration and award-interval analysis over a [`RecordStore`].

use std::path::Path;
use std::sync::Arc;

use validator::Validate;

use crate::error::CoreError;
use crate::intervals::{compute_intervals, summarize, SummarizedAwards};
use crate::movie::{MovieRecord, NewMovie};
use crate::movie_csv::parse_movies;
use crate::producers::group_wins_by_producer;
use crate::store::RecordStore;
use crate::types::{generate_import_id, ImportId};

/// File extension accepted by [`AnalysisService::import`] (case-insensitive).
pub const CSV_EXTENSION: &str = "csv";

/// Entity name reported by [`CoreError::NotFound`].
const MOVIES_ENTITY: &str = "movies";

/// Reject uploads that are empty or not named `*.csv`.
///
/// Both checks run before any parsing or persistence.
pub fn check_upload(bytes: &[u8], filename: &str) -> Result<(), CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::EmptyInput);
    }
    let is_csv = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION));
    if !is_csv {
        return Err(CoreError::InvalidFileType(filename.to_string()));
    }
    Ok(())
}

/// Validate every parsed movie, reporting the first failure by 1-based index.
fn validate_batch(movies: &[NewMovie]) -> Result<(), CoreError> {
    for (index, movie) in movies.iter().enumerate() {
        movie
            .validate()
            .map_err(|e| CoreError::Validation(format!("record {}: {e}", index + 1)))?;
    }
    Ok(())
}

/// Entry point for the four public operations: import, analyze, list ids,
/// list records.
#[derive(Clone)]
pub struct AnalysisService {
    store: Arc<dyn RecordStore>,
}

impl AnalysisService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for health reporting.
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Parse an upload and persist it as a new batch.
    ///
    /// Returns the generated import id. Any parse or validation failure
    /// aborts the batch before anything is written.
    pub async fn import(&self, bytes: &[u8], filename: &str) -> Result<ImportId, CoreError> {
        check_upload(bytes, filename)?;

        let import_id = generate_import_id();
        tracing::info!(
            import_id = %import_id,
            filename = %filename,
            bytes = bytes.len(),
            "Import started"
        );

        let movies = parse_movies(bytes, &import_id).inspect_err(|e| {
            tracing::warn!(import_id = %import_id, error = %e, "Import aborted");
        })?;
        validate_batch(&movies).inspect_err(|e| {
            tracing::warn!(import_id = %import_id, error = %e, "Import aborted");
        })?;

        let saved = self.store.save_all(movies).await?;
        tracing::info!(import_id = %import_id, records = saved.len(), "Import persisted");

        Ok(import_id)
    }

    /// Producers with the smallest and largest gap between consecutive wins.
    ///
    /// Fails with [`CoreError::NotFound`] when the batch has no records.
    pub async fn analyze(&self, import_id: &str) -> Result<SummarizedAwards, CoreError> {
        let records = self.store.find_by_import_id(import_id).await?;
        if records.is_empty() {
            return Err(CoreError::NotFound {
                entity: MOVIES_ENTITY,
                id: import_id.to_string(),
            });
        }

        let wins = group_wins_by_producer(&records);
        let summary = summarize(&compute_intervals(&wins));

        tracing::debug!(
            import_id = %import_id,
            records = records.len(),
            producers = wins.len(),
            min_interval = summary.min.first().map(|i| i.interval),
            max_interval = summary.max.first().map(|i| i.interval),
            min_count = summary.min.len(),
            max_count = summary.max.len(),
            "Analysis computed"
        );

        Ok(summary)
    }

    /// All known import ids, newest batch first.
    pub async fn list_import_ids(&self) -> Result<Vec<ImportId>, CoreError> {
        self.store.list_import_ids().await
    }

    /// All records of a batch; empty when the id is unknown.
    pub async fn list_records(&self, import_id: &str) -> Result<Vec<MovieRecord>, CoreError> {
        self.store.find_by_import_id(import_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::store::InMemoryRecordStore;
    use assert_matches::assert_matches;

    const SAMPLE: &str = "\
year;title;studios;producers;winner
1990;Ghosts Can't Do It;Triumph Releasing;Bo Derek;yes
1990;The Adventures of Ford Fairlane;20th Century Fox;Joel Silver and Steve Perry;yes
1991;Hudson Hawk;TriStar Pictures;Joel Silver;yes
1991;Return to the Blue Lagoon;Columbia Pictures;William A. Graham;
2002;Swept Away;Screen Gems;Matthew Vaughn;yes
2015;Fantastic Four;20th Century Fox;Simon Kinberg, Matthew Vaughn, Hutch Parker;yes
";

    fn service() -> (AnalysisService, Arc<InMemoryRecordStore>) {
        let store = Arc::new(InMemoryRecordStore::new());
        (AnalysisService::new(store.clone()), store)
    }

    // -- upload checks --

    #[test]
    fn check_upload_accepts_csv_in_any_case() {
        assert!(check_upload(b"x", "movies.csv").is_ok());
        assert!(check_upload(b"x", "MOVIES.CSV").is_ok());
    }

    #[test]
    fn check_upload_rejects_other_extensions() {
        assert_matches!(check_upload(b"x", "movies.txt"), Err(CoreError::InvalidFileType(name)) if name == "movies.txt");
        assert_matches!(check_upload(b"x", "movies"), Err(CoreError::InvalidFileType(_)));
        assert_matches!(check_upload(b"x", ""), Err(CoreError::InvalidFileType(_)));
    }

    #[test]
    fn empty_check_runs_before_extension_check() {
        assert_matches!(check_upload(b"", "movies.txt"), Err(CoreError::EmptyInput));
    }

    // -- import --

    #[tokio::test]
    async fn import_then_list_returns_every_data_row() {
        let (service, _) = service();
        let id = service.import(SAMPLE.as_bytes(), "movies.csv").await.unwrap();

        let records = service.list_records(&id).await.unwrap();
        assert_eq!(records.len(), 6);
        assert!(records.iter().all(|r| r.import_id == id));
        assert_eq!(records[0].title, "Ghosts Can't Do It");
        assert_eq!(records[3].producers.as_deref(), Some("William A. Graham"));
        assert!(!records[3].winner);
    }

    #[tokio::test]
    async fn identical_imports_create_independent_batches() {
        let (service, store) = service();
        let first = service.import(SAMPLE.as_bytes(), "movies.csv").await.unwrap();
        let second = service.import(SAMPLE.as_bytes(), "movies.csv").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len().await, 12);
        assert_eq!(service.list_import_ids().await.unwrap(), vec![second, first]);
    }

    #[tokio::test]
    async fn empty_upload_fails_before_parsing() {
        let (service, store) = service();
        assert_matches!(service.import(b"", "movies.csv").await, Err(CoreError::EmptyInput));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn wrong_extension_is_rejected() {
        let (service, store) = service();
        let result = service.import(SAMPLE.as_bytes(), "movies.xlsx").await;
        assert_matches!(result, Err(CoreError::InvalidFileType(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn malformed_row_aborts_whole_batch() {
        let (service, store) = service();
        let input = "year;title;studios;producers;winner\n1990;Hudson Hawk;TriStar;Joel Silver;yes\n1991;broken\n";
        let result = service.import(input.as_bytes(), "movies.csv").await;

        assert_matches!(
            result,
            Err(CoreError::CsvProcessing(ParseError::MalformedRecord { line: 3 }))
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn invalid_year_aborts_whole_batch() {
        let (service, store) = service();
        let input = "1990;Hudson Hawk;TriStar;Joel Silver;yes\nninety;Xanadu;Universal;Lawrence Gordon;\n";
        let result = service.import(input.as_bytes(), "movies.csv").await;

        assert_matches!(
            result,
            Err(CoreError::CsvProcessing(ParseError::InvalidYear { line: 2, .. }))
        );
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn blank_title_fails_validation() {
        let (service, store) = service();
        let input = "1990;Hudson Hawk;TriStar;Joel Silver;yes\n1991;  ;TriStar;Joel Silver;yes\n";
        let result = service.import(input.as_bytes(), "movies.csv").await;

        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.starts_with("record 2:"));
        assert!(store.is_empty().await);
    }

    // -- analyze --

    #[tokio::test]
    async fn analyze_reports_min_and_max_with_ties() {
        let (service, _) = service();
        let id = service.import(SAMPLE.as_bytes(), "movies.csv").await.unwrap();

        let summary = service.analyze(&id).await.unwrap();

        let min: Vec<_> = summary.min.iter().map(|i| i.producer.as_str()).collect();
        assert_eq!(min, vec!["Joel Silver"]);
        assert_eq!(summary.min[0].previous_win, 1990);
        assert_eq!(summary.min[0].following_win, 1991);

        assert_eq!(summary.max.len(), 1);
        assert_eq!(summary.max[0].producer, "Matthew Vaughn");
        assert_eq!(summary.max[0].interval, 13);
        assert_eq!(summary.max[0].previous_win, 2002);
        assert_eq!(summary.max[0].following_win, 2015);
    }

    #[tokio::test]
    async fn analyze_lists_every_tied_producer() {
        let (service, _) = service();
        let input = "\
1990;A;S;Bo Derek;yes
1991;B;S;Bo Derek;yes
1990;C;S;Joel Silver;yes
1991;D;S;Joel Silver;yes
";
        let id = service.import(input.as_bytes(), "movies.csv").await.unwrap();
        let summary = service.analyze(&id).await.unwrap();

        let min: Vec<_> = summary.min.iter().map(|i| i.producer.as_str()).collect();
        assert_eq!(min, vec!["Bo Derek", "Joel Silver"]);
        assert_eq!(summary.max.len(), 2);
    }

    #[tokio::test]
    async fn analyze_without_repeat_winners_is_empty() {
        let (service, _) = service();
        let input = "1980;Xanadu;Universal;Lawrence Gordon;\n1981;Mommie Dearest;Paramount;Frank Yablans;yes\n";
        let id = service.import(input.as_bytes(), "movies.csv").await.unwrap();

        let summary = service.analyze(&id).await.unwrap();
        assert!(summary.min.is_empty());
        assert!(summary.max.is_empty());
    }

    #[tokio::test]
    async fn analyze_with_no_winning_records_is_empty() {
        let (service, _) = service();
        let input = "\
year;title;studios;producers;winner
1990;Ghosts Can't Do It;Triumph Releasing;Bo Derek;no
1991;Hudson Hawk;TriStar Pictures;Bo Derek;
2002;Swept Away;Screen Gems;Matthew Vaughn;false
2015;Fantastic Four;20th Century Fox;Matthew Vaughn;garbage
";
        let id = service.import(input.as_bytes(), "movies.csv").await.unwrap();

        assert_eq!(service.list_records(&id).await.unwrap().len(), 4);
        let summary = service.analyze(&id).await.unwrap();
        assert!(summary.min.is_empty());
        assert!(summary.max.is_empty());
    }

    #[tokio::test]
    async fn analyze_handles_extreme_year_span() {
        let (service, _) = service();
        let input = "-2147483648;A;S;Joel Silver;yes\n2147483647;B;S;Joel Silver;yes\n";
        let id = service.import(input.as_bytes(), "movies.csv").await.unwrap();

        let summary = service.analyze(&id).await.unwrap();

        assert_eq!(summary.min, summary.max);
        assert_eq!(summary.min[0].interval, u32::MAX);
        assert_eq!(summary.min[0].previous_win, i32::MIN);
        assert_eq!(summary.min[0].following_win, i32::MAX);
    }

    #[tokio::test]
    async fn analyze_splits_shared_producer_credits() {
        let (service, _) = service();
        let input = "\
1986;Cobra;Warner Bros.;Yoram Globus and Menahem Golan;yes
1987;Over the Top;Warner Bros.;Menahem Golan;yes
1989;Cyborg;Cannon;Yoram Globus;yes
";
        let id = service.import(input.as_bytes(), "movies.csv").await.unwrap();
        let summary = service.analyze(&id).await.unwrap();

        assert_eq!(summary.min.len(), 1);
        assert_eq!(summary.min[0].producer, "Menahem Golan");
        assert_eq!(summary.max.len(), 1);
        assert_eq!(summary.max[0].producer, "Yoram Globus");
        assert_eq!(summary.max[0].interval, 3);
    }

    #[tokio::test]
    async fn analyze_unknown_id_is_not_found() {
        let (service, _) = service();
        assert_matches!(
            service.analyze("missing").await,
            Err(CoreError::NotFound { entity: "movies", id }) if id == "missing"
        );
    }

    #[tokio::test]
    async fn header_only_upload_imports_nothing() {
        let (service, _) = service();
        let id = service
            .import(b"year;title;studios;producers;winner\n", "movies.csv")
            .await
            .unwrap();

        assert!(service.list_records(&id).await.unwrap().is_empty());
        assert_matches!(service.analyze(&id).await, Err(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_records_for_unknown_id_is_empty() {
        let (service, _) = service();
        assert!(service.list_records("missing").await.unwrap().is_empty());
    }
}
