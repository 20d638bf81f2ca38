use std::sync::Arc;

use awards_core::service::AnalysisService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Import and analysis operations over the configured record store.
    pub service: Arc<AnalysisService>,
}
