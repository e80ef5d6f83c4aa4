use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use super::{SERVICE_NAME, local_timestamp};

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub uptime: String,
}

/// GET /health
///
/// Simple health check endpoint for monitoring service status.
/// Returns a fixed "healthy" status with a fresh timestamp. The `uptime`
/// field is the literal "running", not a measured duration.
pub async fn health() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: local_timestamp(),
        uptime: "running".to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_health_response_serializes_expected_keys() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: local_timestamp(),
            uptime: "running".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(value["service"], "rust-service");
        assert_eq!(value["uptime"], "running");
    }
}
