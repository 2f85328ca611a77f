//! Health check endpoints
//!
//! - /health: basic health check
//! - /health/ready: readiness probe, checks the database
//! - /health/live: liveness probe

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<CheckStatus>,
}

/// Status of an individual dependency
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn respond(status: &'static str, database: Option<CheckStatus>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

pub async fn health_check() -> Json<HealthResponse> {
    respond("healthy", None)
}

/// Readiness probe. 503 while the database is unreachable.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match db::health_check(state.db()).await {
        Ok(()) => Ok(respond(
            "ready",
            Some(CheckStatus {
                status: "healthy",
                message: None,
            }),
        )),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            respond(
                "not_ready",
                Some(CheckStatus {
                    status: "unhealthy",
                    message: Some(e.to_string()),
                }),
            ),
        )),
    }
}

pub async fn liveness_check() -> Json<HealthResponse> {
    respond("alive", None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
        assert!(!response.version.is_empty());
    }

    #[tokio::test]
    async fn test_liveness_check_returns_alive() {
        let response = liveness_check().await;
        assert_eq!(response.status, "alive");
        assert!(response.database.is_none());
    }
}
