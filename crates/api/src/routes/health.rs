//! Health endpoints, mounted at the root (not under `/api/v1`).
//!
//! ```text
//! GET /health          service status and store reachability
//! GET /health/live     liveness probe, always 200 while the process serves
//! GET /health/ready    readiness probe, 503 when the record store is unreachable
//! ```

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the record store is reachable.
    pub store_healthy: bool,
}

/// Probe response payload.
#[derive(Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    pub check: &'static str,
}

async fn store_healthy(state: &AppState) -> bool {
    match state.service.store().health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Record store health check failed");
            false
        }
    }
}

/// GET /health -- returns service and record store health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = store_healthy(&state).await;

    let status = if store_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    })
}

/// GET /health/live
async fn liveness() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "ok",
        check: "liveness",
    })
}

/// GET /health/ready
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ProbeResponse>) {
    if store_healthy(&state).await {
        (
            StatusCode::OK,
            Json(ProbeResponse {
                status: "ok",
                check: "readiness",
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ProbeResponse {
                status: "unavailable",
                check: "readiness",
            }),
        )
    }
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
}
