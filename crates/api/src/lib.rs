//! Request/response types for the pathforge HTTP API.
//!
//! Field names follow the browser client (`apiKey`), so everything here is
//! serialized in camelCase.

use serde::{Deserialize, Serialize};

/// Name of the cookie holding the caller's upstream API key.
pub const API_KEY_COOKIE: &str = "openai_api_key";

// ─── Credentials ────────────────────────────────────────────────────────────

/// Body of `POST /api/set-cookie`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetApiKeyRequest {
    pub api_key: String,
}

/// Response of `GET /api/get-cookie`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyResponse {
    pub api_key: Option<String>,
}

// ─── Health ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ─── Error ──────────────────────────────────────────────────────────────────

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_request_reads_camel_case_key() {
        let req: SetApiKeyRequest =
            serde_json::from_str(r#"{"apiKey":"sk-test"}"#).expect("parse request");
        assert_eq!(req.api_key, "sk-test");
    }

    #[test]
    fn missing_key_serializes_as_null() {
        let body = serde_json::to_value(ApiKeyResponse { api_key: None }).expect("serialize");
        assert_eq!(body, serde_json::json!({ "apiKey": null }));
    }
}
