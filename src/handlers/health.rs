//! Health check endpoint for service monitoring.

use crate::{AppState, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Storage backend in use ("postgres" or "memory")
    pub storage: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "storage": "postgres",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// # Response (500 Internal Server Error)
///
/// If storage is unreachable, returns standard error response.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    state.transactions.ping().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        storage: state.transactions.backend().to_string(),
        timestamp: Utc::now(),
    }))
}
