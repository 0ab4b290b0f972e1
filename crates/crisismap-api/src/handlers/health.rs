//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// GET / - liveness probe. Deliberately does not touch the database: the
/// connection is established lazily on first report traffic, and a probe
/// should not be what triggers it.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "Backend running".to_string(),
    })
}
