use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

pub struct HealthController;

impl HealthController {
    /// GET /health
    pub async fn health_check() -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// GET /
    pub async fn service_info() -> Json<ServiceInfoResponse> {
        Json(ServiceInfoResponse {
            status: "ok".to_string(),
            service: "Ocrolus Widget Quickstart (Rust)".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}
