//! Health check endpoint

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub version: String,
    pub hostname: String,
}

/// `GET /health-check`
pub async fn health_check() -> Json<HealthResponse> {
    let hostname = hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string());

    Json(HealthResponse {
        message: "OK".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        hostname,
    })
}
