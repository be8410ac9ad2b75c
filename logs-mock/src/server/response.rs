//! HTTP response bodies for the log server.

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { ok: true }
    }
}

/// Body returned with every 4xx response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error_type: &'static str,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error_type: &'static str, error: String) -> Self {
        Self {
            status: "error",
            error_type,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_health_response() {
        // given
        let response = HealthResponse::healthy();

        // when
        let json = serde_json::to_string(&response).unwrap();

        // then
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn should_serialize_error_response_with_camel_case() {
        // given
        let response = ErrorResponse::new("invalid_cursor", "Invalid cursor: x".to_string());

        // when
        let json = serde_json::to_string(&response).unwrap();

        // then
        assert!(json.contains(r#""status":"error""#));
        assert!(json.contains(r#""errorType":"invalid_cursor""#));
        assert!(json.contains(r#""error":"Invalid cursor: x""#));
    }
}
