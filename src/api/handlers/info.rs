use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use super::{SERVICE_NAME, local_timestamp, local_timestamp_minus};
use crate::version;

/// Info endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub service: String,
    pub language: String,
    pub timestamp: String,
    pub business_logic: BusinessLogic,
    pub runtime_version: String,
    pub framework_version: String,
}

/// Static snapshot of the demo business-logic state
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessLogic {
    pub processed_items: u32,
    pub status: String,
    pub last_processed: String,
}

/// GET /info
///
/// Reports service identity, a business-logic snapshot with fixed values,
/// and the rustc/axum version strings embedded at build time.
pub async fn info() -> impl IntoResponse {
    let response = InfoResponse {
        service: SERVICE_NAME.to_string(),
        language: "Rust".to_string(),
        timestamp: local_timestamp(),
        business_logic: BusinessLogic {
            processed_items: 42,
            status: "operational".to_string(),
            last_processed: local_timestamp_minus(60),
        },
        runtime_version: version::runtime_version().to_string(),
        framework_version: version::framework_version().to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_info() {
        let response = info().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_info_response_uses_camel_case_keys() {
        let response = BusinessLogic {
            processed_items: 42,
            status: "operational".to_string(),
            last_processed: local_timestamp_minus(60),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["processedItems"], 42);
        assert_eq!(value["status"], "operational");
        assert!(value.get("lastProcessed").is_some());
        assert!(value.get("last_processed").is_none());
    }
}
